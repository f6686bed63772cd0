#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod context;
pub mod identity;

pub use context::AuthorizationContext;
pub use identity::{AuthScheme, Identity, UserId};
