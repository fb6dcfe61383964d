//! Feed registration endpoint.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use gridcal_core::constants::FEED_ROUTE_PREFIX;
use gridcal_service::feed::register_feed;

use crate::capabilities::get_store_from_depot;
use crate::config::get_config_from_depot;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Feed registration request payload
#[derive(Debug, Deserialize)]
pub struct RegisterFeedRequest {
    pub id: String,
    pub range: String,
    pub filename: Option<String>,
}

/// ## Summary
/// Feed registration response payload
#[derive(Debug, Serialize)]
pub struct RegisterFeedResponse {
    pub identifier: String,
    pub filename: String,
    pub url: Option<String>,
}

/// ## Summary
/// POST /api/feeds - Register a feed id against a range reference.
///
/// ## Side Effects
/// - Stores the registration in the feed store
///
/// ## Errors
/// Returns HTTP 400 if the body cannot be parsed
/// Returns HTTP 500 if capabilities or configuration are missing from the depot
#[handler]
async fn register_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing feed registration request");

    let request = match req.parse_json::<RegisterFeedRequest>().await {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "Invalid feed registration body");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }));
            return;
        }
    };

    let (store, config) = match (get_store_from_depot(depot), get_config_from_depot(depot)) {
        (Ok(store), Ok(config)) => (store, config),
        _ => {
            tracing::error!("Feed store or configuration not found in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let base_url = format!("{}{}", config.server.origin(), FEED_ROUTE_PREFIX);
    let feed = register_feed(
        store.as_ref(),
        &config.feed.source_id,
        &request.id,
        &request.range,
        request.filename.as_deref(),
        Some(&base_url),
    );

    res.render(Json(RegisterFeedResponse {
        identifier: feed.identifier,
        filename: feed.filename,
        url: feed.url,
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("feeds").post(register_handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_response_serializes_as_json() {
        let response = RegisterFeedResponse {
            identifier: "grid.standup".to_string(),
            filename: "standup.ics".to_string(),
            url: Some("http://127.0.0.1:8643/feed?feed=grid.standup&filename=standup.ics".to_string()),
        };
        let value = serde_json::to_value(&response).expect("serializes");
        assert_eq!(value["identifier"], "grid.standup");
        assert_eq!(value["filename"], "standup.ics");
    }

    #[test]
    fn registration_request_accepts_optional_filename() {
        let request: RegisterFeedRequest =
            serde_json::from_str(r#"{"id":"standup","range":"standup.txt"}"#).expect("parses");
        assert_eq!(request.id, "standup");
        assert_eq!(request.range, "standup.txt");
        assert_eq!(request.filename, None);
    }
}
