//! The webcal feed endpoint.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler};

use gridcal_core::constants::FEED_ROUTE_COMPONENT;
use gridcal_service::error::ServiceError;
use gridcal_service::feed::resolve_feed;

use crate::capabilities::{get_source_from_depot, get_store_from_depot};

/// ## Summary
/// `GET /feed?feed=<identifier>&filename=<name>` — resolves a registered
/// feed and returns it as a downloadable `text/calendar` attachment.
///
/// ## Errors
/// Returns HTTP 400 when the feed parameter is missing or malformed
/// Returns HTTP 404 when the feed is unknown or its range cannot be read
/// Returns HTTP 500 when the capabilities are missing from the depot
#[handler]
async fn feed(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(feed_param) = req.query::<String>("feed") else {
        tracing::debug!("Feed request without feed parameter");
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };
    let filename_param = req.query::<String>("filename");

    let (store, source) = match (get_store_from_depot(depot), get_source_from_depot(depot)) {
        (Ok(store), Ok(source)) => (store, source),
        _ => {
            tracing::error!("Feed capabilities not found in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let payload = match resolve_feed(
        store.as_ref(),
        source.as_ref(),
        &feed_param,
        filename_param.as_deref(),
    ) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::debug!(feed = %feed_param, error = %err, "Feed resolution failed");
            res.status_code(status_for(&err));
            return;
        }
    };

    res.status_code(StatusCode::OK);
    if let Err(err) = res.add_header("content-type", payload.content_type, true) {
        tracing::error!(error = %err, "Failed to set content type");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    }
    if let Err(err) = res.add_header("content-disposition", attachment(&payload.filename), true) {
        tracing::error!(error = %err, "Failed to set content disposition");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    }
    if let Err(err) = res.write_body(payload.body) {
        tracing::error!(error = %err, "Failed to write feed body");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::MalformedFeedId(_) => StatusCode::BAD_REQUEST,
        ServiceError::UnknownFeed(_) | ServiceError::RangeUnavailable(_) => StatusCode::NOT_FOUND,
        ServiceError::RfcError(_) | ServiceError::CoreError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(FEED_ROUTE_COMPONENT).get(feed)
}
