pub mod agenda;
pub mod error;
pub mod notifier;
pub mod repo;
pub mod service;
