mod feeds;
mod healthcheck;

use salvo::Router;

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(healthcheck::routes())
        .push(feeds::routes())
}
