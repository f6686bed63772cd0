#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Response envelope for the VSP gateway REST API.
//!
//! Every handler answers with an [`ApiReply`]: an optional payload, a status
//! code drawn from [`ApiCode`], a human readable message and, on failure, the
//! caller-facing error text. The reply renders as
//!
//! ```json
//! { "status": "error", "code": 3, "message": "voting error: ...", "data": null }
//! ```
//!
//! where `code` is the numeric gRPC status code clients already understand.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

/// Status codes the API can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCode {
    Ok,
    InvalidArgument,
    Unauthenticated,
    Internal,
}

impl ApiCode {
    /// Numeric gRPC status code reported in the body.
    #[must_use]
    pub const fn grpc_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::InvalidArgument => 3,
            Self::Internal => 13,
            Self::Unauthenticated => 16,
        }
    }

    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// `(payload, code, message, error)` tuple returned by API handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T> {
    pub payload: Option<T>,
    pub code: ApiCode,
    pub message: String,
    pub error: Option<String>,
}

impl<T> ApiReply<T> {
    #[must_use]
    pub fn ok(payload: T, message: impl Into<String>) -> Self {
        Self {
            payload: Some(payload),
            code: ApiCode::Ok,
            message: message.into(),
            error: None,
        }
    }

    #[must_use]
    pub fn error(code: ApiCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            payload: None,
            code,
            message: message.into(),
            error: Some(error.into()),
        }
    }

    /// Message as shown to the caller, with the error text appended.
    #[must_use]
    pub fn display_message(&self) -> String {
        match &self.error {
            Some(err) => format!("{}: {err}", self.message),
            None => self.message.clone(),
        }
    }
}

#[derive(Serialize)]
struct ReplyBody<'a, T> {
    status: &'static str,
    code: u8,
    message: String,
    data: Option<&'a T>,
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        let body = ReplyBody {
            status: if self.code.is_ok() { "success" } else { "error" },
            code: self.code.grpc_code(),
            message: self.display_message(),
            data: self.payload.as_ref(),
        };
        (self.code.http_status(), Json(body)).into_response()
    }
}
