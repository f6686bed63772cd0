#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! API authentication for the VSP gateway.
//!
//! Requests under the configured path prefix carry one of two credential
//! schemes in their `Authorization` header:
//!
//! - `Bearer <token>`: the pre-shared static token, or an HMAC-signed claims
//!   token naming a user in its `loggedInAs` claim
//! - `TicketAuth SignedTimestamp=..,Signature=..,TicketHash=..`: a fresh
//!   timestamp signed with the key behind a ticket's fee address
//!
//! [`SchemeDispatcher`] picks the validator and produces the request's
//! `AuthorizationContext`; [`middleware::api_auth_middleware`] stores it in
//! the request extensions. Refused credentials never fail the request, they
//! only leave it unauthenticated.
//!
//! ## Configuration
//!
//! ```yaml
//! api_auth:
//!   path_prefix: "/api"
//!   static_token: "change-me"
//!   static_token_user_id: 1
//!   token_secret: "hmac-secret"
//!   replay_window_secs: 30
//!   network: mainnet
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod middleware;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ApiAuthConfig, Network, TicketSourceConfig};
pub use domain::challenge::{ChallengeError, ChallengeGenerator};
pub use domain::dispatcher::SchemeDispatcher;
pub use domain::error::AuthError;
pub use infra::StaticTicketInfoSource;
