use std::sync::Arc;
use std::time::Duration;

use api_auth::middleware::api_auth_middleware;
use api_auth::{ChallengeGenerator, SchemeDispatcher, StaticTicketInfoSource};
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{HeaderName, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use vote_prefs::{InMemoryUserStore, LoggingNotifier, MaskAgendaPolicy, VoteBitsUpdater};

use crate::config::GatewayConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn health() -> &'static str {
    "ok"
}

/// Build the full router from configuration.
///
/// Layers, outermost first: request id, trace, timeout, body limit, then
/// the authentication middleware in front of every route.
pub fn build_router(cfg: GatewayConfig) -> Router {
    let store = Arc::new(InMemoryUserStore::from_seed(cfg.vote_prefs.users));
    let tickets = Arc::new(StaticTicketInfoSource::from_config(cfg.tickets));
    tracing::info!(
        users = store.len(),
        tickets = tickets.len(),
        "loaded development collaborators"
    );

    let dispatcher = Arc::new(SchemeDispatcher::from_config(
        &cfg.api_auth,
        tickets,
        store.clone(),
    ));
    let updater = Arc::new(VoteBitsUpdater::new(
        store.clone(),
        store,
        Arc::new(MaskAgendaPolicy::new(cfg.vote_prefs.agenda_mask)),
        Arc::new(LoggingNotifier),
    ));

    let api = api_auth::api::rest::routes::register_routes(
        Router::new(),
        Arc::new(ChallengeGenerator::default()),
    );
    let api = vote_prefs::api::rest::routes::register_routes(api, updater);

    let prefix = cfg.api_auth.path_prefix.trim_end_matches('/');
    let mut router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    router = router
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(dispatcher, api_auth_middleware));

    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.body_limit_bytes));
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(cfg.request_timeout_secs),
    ));

    router = router.layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
        let rid = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("n/a");
        tracing::info_span!(
            "http_request",
            method = %req.method(),
            uri = %req.uri().path(),
            request_id = %rid,
        )
    }));

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}
