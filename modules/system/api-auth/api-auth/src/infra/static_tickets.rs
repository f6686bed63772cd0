//! Config-backed ticket source for standalone runs.

use std::collections::HashMap;

use api_auth_sdk::{LookupError, TicketInfo, TicketInfoSource};
use async_trait::async_trait;

use crate::config::TicketSourceConfig;

/// Fixed map of ticket hash to recorded addresses.
#[derive(Debug, Clone, Default)]
pub struct StaticTicketInfoSource {
    tickets: HashMap<String, TicketInfo>,
}

impl StaticTicketInfoSource {
    #[must_use]
    pub fn new(tickets: impl IntoIterator<Item = (String, TicketInfo)>) -> Self {
        Self {
            tickets: tickets.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn from_config(cfg: TicketSourceConfig) -> Self {
        Self {
            tickets: cfg.into_map(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[async_trait]
impl TicketInfoSource for StaticTicketInfoSource {
    async fn ticket_info(&self, ticket_hash: &str) -> Result<TicketInfo, LookupError> {
        self.tickets
            .get(ticket_hash)
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}
