use std::sync::Arc;

use axum::Extension;
use vsp_api::{ApiCode, ApiReply};

use crate::api::rest::dto::ChallengeDto;
use crate::domain::challenge::ChallengeGenerator;

pub const CHALLENGE_ISSUED: &str = "challenge issued";
pub const CHALLENGE_FAILED: &str = "challenge error";

#[tracing::instrument(skip_all)]
pub async fn get_challenge(
    Extension(generator): Extension<Arc<ChallengeGenerator>>,
) -> ApiReply<ChallengeDto> {
    match generator.issue() {
        Ok(challenge) => ApiReply::ok(ChallengeDto { challenge }, CHALLENGE_ISSUED),
        Err(e) => {
            tracing::error!(error = %e, "failed to issue challenge");
            ApiReply::error(ApiCode::Internal, CHALLENGE_FAILED, "internal error")
        }
    }
}
