use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::VoteBitsUpdater;

pub const VOTING_PATH: &str = "/v3/voting";

/// Routes served under the API prefix; the caller nests them.
pub fn register_routes(router: Router, service: Arc<VoteBitsUpdater>) -> Router {
    router
        .route(VOTING_PATH, post(handlers::update_voting))
        .layer(Extension(service))
}
