use crate::config::BLOCK_VALID_BIT;

/// Decides whether a vote bits value is legal for the active agendas.
pub trait AgendaPolicy: Send + Sync {
    fn is_valid_vote_bits(&self, vote_bits: u16) -> bool;
}

/// Accepts values with the block-valid bit set and no bits outside the
/// active agenda mask.
#[derive(Debug, Clone, Copy)]
pub struct MaskAgendaPolicy {
    agenda_mask: u16,
}

impl MaskAgendaPolicy {
    #[must_use]
    pub const fn new(agenda_mask: u16) -> Self {
        Self { agenda_mask }
    }
}

impl AgendaPolicy for MaskAgendaPolicy {
    fn is_valid_vote_bits(&self, vote_bits: u16) -> bool {
        let allowed = self.agenda_mask | BLOCK_VALID_BIT;
        vote_bits & BLOCK_VALID_BIT != 0 && vote_bits & !allowed == 0
    }
}
