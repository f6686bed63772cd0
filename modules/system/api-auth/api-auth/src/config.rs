//! Configuration for API authentication.

use std::collections::HashMap;

use secrecy::SecretString;
use serde::Deserialize;

use api_auth_sdk::TicketInfo;

fn default_path_prefix() -> String {
    "/api".to_owned()
}

/// Authentication configuration.
///
/// Secrets are held as `SecretString` so they never show up in `Debug` output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiAuthConfig {
    /// Requests whose path starts with this prefix go through the dispatcher.
    /// Everything else proceeds unauthenticated.
    pub path_prefix: String,

    /// Pre-shared token accepted as `Bearer <token>` for service calls.
    /// Disabled when absent.
    pub static_token: Option<SecretString>,

    /// User the static token acts as.
    pub static_token_user_id: i64,

    /// HMAC secret for signed claims tokens. Disabled when absent.
    pub token_secret: Option<SecretString>,

    /// Freshness window for ticket auth timestamps, in seconds.
    pub replay_window_secs: i64,

    /// Network whose address encoding ticket fee addresses use.
    pub network: Network,
}

impl Default for ApiAuthConfig {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
            static_token: None,
            static_token_user_id: 0,
            token_secret: None,
            replay_window_secs: crate::domain::replay::DEFAULT_REPLAY_WINDOW_SECS,
            network: Network::default(),
        }
    }
}

/// Address network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Simnet,
}

impl Network {
    /// Two-byte prefix of pay-to-pubkey-hash addresses on this network.
    #[must_use]
    pub const fn p2pkh_id(self) -> [u8; 2] {
        match self {
            Self::Mainnet => [0x07, 0x3f],
            Self::Testnet => [0x0f, 0x21],
            Self::Simnet => [0x0e, 0x91],
        }
    }
}

/// Tickets served by the development ticket source.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct TicketSourceConfig {
    pub tickets: Vec<StaticTicket>,
}

impl TicketSourceConfig {
    #[must_use]
    pub fn into_map(self) -> HashMap<String, TicketInfo> {
        self.tickets
            .into_iter()
            .map(|t| {
                (
                    t.ticket_hash,
                    TicketInfo {
                        owner_fee_address: t.owner_fee_address,
                        multisig_address: t.multisig_address,
                    },
                )
            })
            .collect()
    }
}

/// One ticket entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticTicket {
    pub ticket_hash: String,
    pub owner_fee_address: String,
    pub multisig_address: String,
}
