use serde::{Deserialize, Serialize};

use crate::domain::service::VoteBitsChange;

/// Form body of a voting preference update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVoteBitsForm {
    #[serde(rename = "VoteBits", default)]
    pub vote_bits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteBitsDto {
    pub previous_vote_bits: u16,
    pub vote_bits: u16,
}

impl From<VoteBitsChange> for VoteBitsDto {
    fn from(change: VoteBitsChange) -> Self {
        Self {
            previous_vote_bits: change.previous,
            vote_bits: change.current,
        }
    }
}
