#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! VSP gateway wiring: configuration, logging and the HTTP router.

pub mod app;
pub mod config;
pub mod logging;

pub use app::build_router;
pub use config::GatewayConfig;
