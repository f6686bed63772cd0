use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::{Extension, Form};
use vsp_api::ApiReply;
use vsp_security::AuthorizationContext;

use crate::api::rest::dto::{UpdateVoteBitsForm, VoteBitsDto};
use crate::domain::error::DomainError;
use crate::domain::service::VoteBitsUpdater;

pub const VOTING_UPDATED: &str = "successfully updated voting preferences";
pub const VOTING_ERROR: &str = "voting error";

#[tracing::instrument(skip_all)]
pub async fn update_voting(
    Extension(service): Extension<Arc<VoteBitsUpdater>>,
    ctx: Option<Extension<AuthorizationContext>>,
    form: Result<Form<UpdateVoteBitsForm>, FormRejection>,
) -> ApiReply<VoteBitsDto> {
    let ctx = ctx.map_or_else(AuthorizationContext::anonymous, |Extension(ctx)| ctx);

    // Identity is checked before the body is looked at.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            let e = if ctx.is_authenticated() {
                DomainError::invalid_argument(rejection.body_text())
            } else {
                DomainError::unauthenticated(ctx.failure_reason().unwrap_or("no credentials"))
            };
            log_voting_error(&e);
            return ApiReply::error(e.code(), VOTING_ERROR, e.public_message());
        }
    };

    match service.update(&ctx, &form.vote_bits).await {
        Ok(change) => ApiReply::ok(VoteBitsDto::from(change), VOTING_UPDATED),
        Err(e) => {
            log_voting_error(&e);
            ApiReply::error(e.code(), VOTING_ERROR, e.public_message())
        }
    }
}

fn log_voting_error(err: &DomainError) {
    match err {
        DomainError::Internal(_) => tracing::error!(error = %err, "vote bits update failed"),
        DomainError::Unauthenticated(_) | DomainError::InvalidArgument(_) => {
            tracing::debug!(error = %err, "vote bits update rejected");
        }
    }
}
