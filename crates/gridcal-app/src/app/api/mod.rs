mod app_specific;
mod feed;

use salvo::Router;

// Re-export route constants from core
pub use gridcal_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, FEED_ROUTE_COMPONENT, FEED_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main router: the feed endpoint at the root and the
/// app-specific API underneath `/api`.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(feed::routes())
        .push(Router::with_path(API_ROUTE_COMPONENT).push(app_specific::routes()))
}
