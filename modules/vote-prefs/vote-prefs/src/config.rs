use serde::Deserialize;

/// Bit 0 of every vote bits value: the previous block is valid.
pub const BLOCK_VALID_BIT: u16 = 0x0001;

const fn default_agenda_mask() -> u16 {
    0x0006
}

/// Vote preference configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VotePrefsConfig {
    /// Bits of the currently active agendas. Bits outside this mask (other
    /// than [`BLOCK_VALID_BIT`]) are rejected.
    pub agenda_mask: u16,

    /// Users loaded into the in-memory store at startup.
    pub users: Vec<SeedUser>,
}

impl Default for VotePrefsConfig {
    fn default() -> Self {
        Self {
            agenda_mask: default_agenda_mask(),
            users: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    pub id: i64,
    #[serde(default)]
    pub multisig_address: Option<String>,
    #[serde(default = "default_vote_bits")]
    pub vote_bits: u16,
}

const fn default_vote_bits() -> u16 {
    BLOCK_VALID_BIT
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn seed_users_default_to_block_valid() {
        let cfg: VotePrefsConfig = serde_json::from_value(serde_json::json!({
            "users": [{ "id": 3, "multisig_address": "DcAbc" }]
        }))
        .unwrap();

        assert_eq!(cfg.agenda_mask, 0x0006);
        assert_eq!(cfg.users[0].vote_bits, BLOCK_VALID_BIT);
        assert_eq!(cfg.users[0].multisig_address.as_deref(), Some("DcAbc"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<VotePrefsConfig, _> =
            serde_json::from_value(serde_json::json!({ "mask": 1 }));
        assert!(result.is_err());
    }
}
