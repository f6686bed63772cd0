#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Vote preference updates.
//!
//! [`VoteBitsUpdater`] changes the vote bits of the user behind a request's
//! `AuthorizationContext`. It validates the requested bitmask against the
//! active agendas, persists it atomically and tells the voting
//! infrastructure when the stored value actually changed.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use config::{SeedUser, VotePrefsConfig};
pub use domain::agenda::{AgendaPolicy, MaskAgendaPolicy};
pub use domain::error::DomainError;
pub use domain::notifier::{NotifyError, VotingInfraNotifier};
pub use domain::repo::VoteBitsRepository;
pub use domain::service::{VoteBitsChange, VoteBitsUpdater};
pub use infra::notifier::LoggingNotifier;
pub use infra::storage::memory::InMemoryUserStore;
