//! `TicketAuth` parameter list parsing.

pub const TIMESTAMP_PARAM: &str = "SignedTimestamp";
pub const SIGNATURE_PARAM: &str = "Signature";
pub const TICKET_HASH_PARAM: &str = "TicketHash";

/// Recognized `TicketAuth` parameters. Absent parameters are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthParams {
    pub timestamp: String,
    pub signature: String,
    pub ticket_hash: String,
}

impl AuthParams {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.timestamp.is_empty() && !self.signature.is_empty() && !self.ticket_hash.is_empty()
    }
}

/// Parse `key=value` pairs separated by commas.
///
/// Each token splits on its first `=`, so base64 padding stays in the value.
/// Tokens without any `=` are skipped; unknown keys are ignored. Tokens are
/// applied in order, so a repeated key keeps its last value.
#[must_use]
pub fn parse_auth_params(params: &str) -> AuthParams {
    let mut out = AuthParams::default();
    for token in params.split(',') {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        let value = value.trim().to_owned();
        match key.trim() {
            TIMESTAMP_PARAM => out.timestamp = value,
            SIGNATURE_PARAM => out.signature = value,
            TICKET_HASH_PARAM => out.ticket_hash = value,
            _ => {}
        }
    }
    out
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_all_recognized_keys() {
        let p = parse_auth_params("SignedTimestamp=1700000000,Signature=c2ln,TicketHash=abcd");

        assert_eq!(p.timestamp, "1700000000");
        assert_eq!(p.signature, "c2ln");
        assert_eq!(p.ticket_hash, "abcd");
        assert!(p.is_complete());
    }

    #[test]
    fn order_independent_and_whitespace_tolerant() {
        let p = parse_auth_params(" TicketHash = abcd ,  SignedTimestamp= 17 ,Signature =c2ln");

        assert_eq!(p.timestamp, "17");
        assert_eq!(p.signature, "c2ln");
        assert_eq!(p.ticket_hash, "abcd");
    }

    #[test]
    fn duplicate_key_last_wins() {
        let p = parse_auth_params("SignedTimestamp=1,SignedTimestamp=2");
        assert_eq!(p.timestamp, "2");

        let p = parse_auth_params("SignedTimestamp=2,SignedTimestamp=1");
        assert_eq!(p.timestamp, "1");
    }

    #[test]
    fn tokens_without_equals_are_discarded() {
        let p = parse_auth_params("TicketHash,SignedTimestamp=5,Signature");

        assert_eq!(p.ticket_hash, "");
        assert_eq!(p.signature, "");
        assert_eq!(p.timestamp, "5");
        assert!(!p.is_complete());
    }

    #[test]
    fn value_keeps_base64_padding() {
        let p = parse_auth_params("Signature=c2lnbg==, TicketHash=abcd");

        assert_eq!(p.signature, "c2lnbg==");
        assert_eq!(p.ticket_hash, "abcd");
    }

    #[test]
    fn discarded_duplicate_does_not_clear_earlier_value() {
        let p = parse_auth_params("TicketHash=abcd,TicketHash");
        assert_eq!(p.ticket_hash, "abcd");
    }

    #[test]
    fn unknown_keys_ignored() {
        let p = parse_auth_params("Nonce=1,SignedTimestamp=9");

        assert_eq!(p.timestamp, "9");
        assert_eq!(p, AuthParams {
            timestamp: "9".to_owned(),
            ..AuthParams::default()
        });
    }

    #[test]
    fn empty_input_yields_empty_params() {
        assert_eq!(parse_auth_params(""), AuthParams::default());
    }
}
