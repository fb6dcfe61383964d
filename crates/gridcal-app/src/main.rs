use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};

use gridcal_app::app::api::routes;
use gridcal_app::capabilities::CapabilityHandler;
use gridcal_app::config::ConfigHandler;
use gridcal_core::config::load_config;
use gridcal_core::constants::FEED_ROUTE_PREFIX;
use gridcal_service::feed::register_feed;
use gridcal_service::source::{DirRangeSource, RangeSource};
use gridcal_service::store::{FeedStore, MemoryFeedStore};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting gridcal feed server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store: Arc<dyn FeedStore> = Arc::new(MemoryFeedStore::new());
    let source: Arc<dyn RangeSource> = Arc::new(DirRangeSource::new(config.feed.data_dir.clone()));

    let base_url = format!("{}{}", config.server.origin(), FEED_ROUTE_PREFIX);
    for (id, range_ref) in &config.feed.seeds {
        let feed = register_feed(
            store.as_ref(),
            &config.feed.source_id,
            id,
            range_ref,
            None,
            Some(&base_url),
        );
        tracing::info!(identifier = %feed.identifier, url = ?feed.url, "Seeded feed");
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(CapabilityHandler {
            store,
            source,
        })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
