use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::challenge::ChallengeGenerator;

pub const CHALLENGE_PATH: &str = "/v3/challenge";

/// Routes served under the API prefix; the caller nests them.
pub fn register_routes(router: Router, generator: Arc<ChallengeGenerator>) -> Router {
    router
        .route(CHALLENGE_PATH, get(handlers::get_challenge))
        .layer(Extension(generator))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::challenge::RandomSource;

    struct Broken;

    impl RandomSource for Broken {
        fn fill(&self, _buf: &mut [u8]) -> Result<(), String> {
            Err("no entropy".to_owned())
        }
    }

    async fn get_json(router: Router) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(CHALLENGE_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn challenge_endpoint_returns_challenge() {
        let router = register_routes(Router::new(), Arc::new(ChallengeGenerator::default()));

        let (status, body) = get_json(router).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["challenge"].as_str().unwrap().len(), 44);
    }

    #[tokio::test]
    async fn random_failure_is_internal() {
        let router = register_routes(Router::new(), Arc::new(ChallengeGenerator::new(Broken)));

        let (status, body) = get_json(router).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 13);
        assert!(body["data"].is_null());
    }
}
