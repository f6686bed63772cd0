//! Models returned by collaborator lookups.

use serde::{Deserialize, Serialize};
use vsp_security::UserId;

/// Snapshot of the addresses recorded for a ticket.
///
/// `owner_fee_address` is the address whose key proves ownership;
/// `multisig_address` is the voting address the pool controls for the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketInfo {
    pub owner_fee_address: String,
    pub multisig_address: String,
}

/// A registered pool user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub multisig_address: Option<String>,
    pub vote_bits: u16,
}
