//! Axum middleware that attaches an `AuthorizationContext` to every request.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;

use crate::domain::dispatcher::SchemeDispatcher;

/// Runs the dispatcher and stores its result in the request extensions.
///
/// Never rejects a request: handlers decide whether an anonymous context is
/// acceptable. A header that is not valid UTF-8 is treated as absent.
pub async fn api_auth_middleware(
    State(dispatcher): State<Arc<SchemeDispatcher>>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    let ctx = dispatcher
        .dispatch(req.uri().path(), header.as_deref())
        .await;
    req.extensions_mut().insert(ctx);

    next.run(req).await
}
