use anyhow::Result;
use config::Config;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn serve_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            self.serve_origin()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Identifier of the tabular source backing this host, used as the
    /// first half of composed feed identifiers.
    pub source_id: String,
    /// Root directory resolved against range references by the file-backed
    /// row source.
    pub data_dir: String,
    /// Feeds registered at startup: feed id -> range reference.
    #[serde(default)]
    pub seeds: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8643)?
            .set_default("feed.source_id", "grid")?
            .set_default("feed.data_dir", "feeds")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_prefers_configured_value() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8643,
            serve_origin: Some("https://cal.example.com".to_string()),
        };
        assert_eq!(server.origin(), "https://cal.example.com");
    }

    #[test]
    fn origin_falls_back_to_host_port() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8643,
            serve_origin: None,
        };
        assert_eq!(server.origin(), "http://127.0.0.1:8643");
    }
}
