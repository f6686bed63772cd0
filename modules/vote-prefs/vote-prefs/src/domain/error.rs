use api_auth_sdk::LookupError;
use vsp_api::ApiCode;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub fn code(&self) -> ApiCode {
        match self {
            Self::Unauthenticated(_) => ApiCode::Unauthenticated,
            Self::InvalidArgument(_) => ApiCode::InvalidArgument,
            Self::Internal(_) => ApiCode::Internal,
        }
    }

    /// Error text safe to show the caller. Server faults stay opaque.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthenticated(_) => "unauthenticated".to_owned(),
            Self::InvalidArgument(msg) => msg.clone(),
            Self::Internal(_) => "internal error".to_owned(),
        }
    }
}

impl From<LookupError> for DomainError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound => Self::unauthenticated("user is not registered"),
            LookupError::Unavailable(msg) | LookupError::Internal(msg) => Self::Internal(msg),
        }
    }
}
