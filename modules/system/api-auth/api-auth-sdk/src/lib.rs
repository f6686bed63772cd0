//! `api_auth` SDK
//!
//! Contracts the authentication core consumes but does not implement:
//!
//! - [`TicketInfoSource`] - resolves a ticket hash to its fee and multisig addresses
//! - [`UserDirectory`] - read access to stored pool users
//! - [`TicketInfo`], [`User`] - lookup models
//! - [`LookupError`] - lookup failures
//!
//! ## Usage
//!
//! ```ignore
//! use api_auth_sdk::TicketInfoSource;
//!
//! let info = tickets.ticket_info("4a5b...").await?;
//! println!("{}", info.multisig_address);
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::{TicketInfoSource, UserDirectory};
pub use error::LookupError;
pub use models::{TicketInfo, User};
