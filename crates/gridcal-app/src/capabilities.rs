use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use gridcal_core::error::CoreError;
use gridcal_service::source::RangeSource;
use gridcal_service::store::FeedStore;

/// Injects the feed store and row source into the depot so handlers can
/// resolve feeds without a direct dependency on the concrete backends.
pub struct CapabilityHandler {
    pub store: Arc<dyn FeedStore>,
    pub source: Arc<dyn RangeSource>,
}

#[async_trait]
impl salvo::Handler for CapabilityHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.store));
        depot.inject(Arc::clone(&self.source));
    }
}

/// ## Summary
/// Retrieves the feed store from the depot.
///
/// ## Errors
/// Returns an error if the feed store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn FeedStore>> {
    depot
        .obtain::<Arc<dyn FeedStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Feed store not found in depot").into())
}

/// ## Summary
/// Retrieves the row source from the depot.
///
/// ## Errors
/// Returns an error if the row source is not found in the depot.
pub fn get_source_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn RangeSource>> {
    depot
        .obtain::<Arc<dyn RangeSource>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Row source not found in depot").into())
}
