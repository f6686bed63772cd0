//! `Bearer` credentials: the pre-shared static token and signed claims tokens.

use std::sync::Arc;

use api_auth_sdk::{LookupError, UserDirectory};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use vsp_security::{AuthScheme, UserId};

use super::error::AuthError;

/// Claim naming the user a signed claims token was issued to.
pub const LOGGED_IN_AS_CLAIM: &str = "loggedInAs";

#[derive(Debug, Clone, Deserialize)]
struct ApiTokenClaims {
    #[serde(rename = "loggedInAs")]
    logged_in_as: Option<Value>,
}

/// Validates `Bearer` tokens and resolves them to a user.
pub struct LegacyCredentialValidator {
    static_token: Option<SecretString>,
    static_token_user: UserId,
    claims_key: Option<DecodingKey>,
    validation: Validation,
    users: Arc<dyn UserDirectory>,
}

impl LegacyCredentialValidator {
    /// Either secret may be absent, which disables that form of token.
    #[must_use]
    pub fn new(
        static_token: Option<SecretString>,
        static_token_user: UserId,
        token_secret: Option<&SecretString>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        let claims_key =
            token_secret.map(|s| DecodingKey::from_secret(s.expose_secret().as_bytes()));

        // HMAC family only; a token whose header names any other algorithm
        // fails to decode.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        Self {
            static_token,
            static_token_user,
            claims_key,
            validation,
            users,
        }
    }

    /// Validate `token`, logging and swallowing every failure.
    pub async fn validate(&self, token: &str) -> Option<(UserId, AuthScheme)> {
        match self.verify(token).await {
            Ok(resolved) => Some(resolved),
            Err(err) if err.is_internal() => {
                tracing::error!(error = %err, token, "api token validation failed");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, token, "api token refused");
                None
            }
        }
    }

    /// Resolve `token` to the user it acts as.
    ///
    /// # Errors
    ///
    /// - `ClaimsInvalid` if the token is neither the static token nor a
    ///   valid signed claims token naming a known user
    /// - `Internal` if the user lookup fails
    pub async fn verify(&self, token: &str) -> Result<(UserId, AuthScheme), AuthError> {
        if token.is_empty() {
            return Err(AuthError::ClaimsInvalid("empty token".to_owned()));
        }

        if let Some(static_token) = &self.static_token
            && token == static_token.expose_secret()
        {
            return Ok((self.static_token_user, AuthScheme::StaticToken));
        }

        let Some(key) = &self.claims_key else {
            return Err(AuthError::ClaimsInvalid(
                "signed claims tokens are not enabled".to_owned(),
            ));
        };

        let data = jsonwebtoken::decode::<ApiTokenClaims>(token, key, &self.validation)
            .map_err(|e| AuthError::ClaimsInvalid(e.to_string()))?;

        let user_id = data
            .claims
            .logged_in_as
            .as_ref()
            .and_then(Value::as_i64)
            .map(UserId::new)
            .ok_or_else(|| {
                AuthError::ClaimsInvalid(format!("{LOGGED_IN_AS_CLAIM} is missing or not an integer"))
            })?;

        let user = self.users.find_by_id(user_id).await.map_err(|e| match e {
            LookupError::NotFound => AuthError::ClaimsInvalid(format!("user {user_id} not found")),
            LookupError::Unavailable(msg) | LookupError::Internal(msg) => AuthError::Internal(msg),
        })?;

        Ok((user.id, AuthScheme::SignedClaims))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::test_support::{UserFixture, sign_claims};
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    const SECRET: &str = "claims-secret";

    fn validator() -> LegacyCredentialValidator {
        LegacyCredentialValidator::new(
            Some(SecretString::from("static-secret")),
            UserId::new(1),
            Some(&SecretString::from(SECRET)),
            Arc::new(UserFixture::new([(UserId::new(42), None)])),
        )
    }

    #[tokio::test]
    async fn static_token_resolves_configured_user() {
        let result = validator().verify("static-secret").await;

        assert_eq!(result, Ok((UserId::new(1), AuthScheme::StaticToken)));
    }

    #[tokio::test]
    async fn signed_claims_resolve_known_user() {
        let token = sign_claims(SECRET, Algorithm::HS256, &json!({"loggedInAs": 42}));

        let result = validator().verify(&token).await;
        assert_eq!(result, Ok((UserId::new(42), AuthScheme::SignedClaims)));
    }

    #[tokio::test]
    async fn every_hmac_variant_is_accepted() {
        for alg in [Algorithm::HS384, Algorithm::HS512] {
            let token = sign_claims(SECRET, alg, &json!({"loggedInAs": 42}));
            assert!(validator().verify(&token).await.is_ok(), "{alg:?}");
        }
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let token = sign_claims("other-secret", Algorithm::HS256, &json!({"loggedInAs": 42}));

        assert!(matches!(
            validator().verify(&token).await,
            Err(AuthError::ClaimsInvalid(_))
        ));
    }

    #[tokio::test]
    async fn non_hmac_algorithm_header_is_rejected() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"loggedInAs":42}"#);
        let token = format!("{header}.{payload}.c2lnbmF0dXJl");

        assert!(matches!(
            validator().verify(&token).await,
            Err(AuthError::ClaimsInvalid(_))
        ));
    }

    #[tokio::test]
    async fn non_integer_claim_is_rejected() {
        for claims in [
            json!({"loggedInAs": "42"}),
            json!({"loggedInAs": 42.5}),
            json!({"loggedInAs": null}),
            json!({"sub": "42"}),
        ] {
            let token = sign_claims(SECRET, Algorithm::HS256, &claims);
            assert!(
                matches!(validator().verify(&token).await, Err(AuthError::ClaimsInvalid(_))),
                "{claims}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let token = sign_claims(SECRET, Algorithm::HS256, &json!({"loggedInAs": 7}));

        assert_eq!(
            validator().verify(&token).await,
            Err(AuthError::ClaimsInvalid("user 7 not found".to_owned()))
        );
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let token = sign_claims(SECRET, Algorithm::HS256, &json!({"loggedInAs": 42, "exp": 1}));

        assert!(validator().verify(&token).await.is_err());
    }

    #[tokio::test]
    async fn disabled_forms_reject_everything() {
        let validator = LegacyCredentialValidator::new(
            None,
            UserId::new(1),
            None,
            Arc::new(UserFixture::new([(UserId::new(42), None)])),
        );
        let token = sign_claims(SECRET, Algorithm::HS256, &json!({"loggedInAs": 42}));

        assert!(validator.verify("static-secret").await.is_err());
        assert!(validator.verify(&token).await.is_err());
        assert!(validator.verify("").await.is_err());
    }

    #[tokio::test]
    async fn validate_swallows_failures() {
        assert_eq!(validator().validate("garbage").await, None);
        assert_eq!(
            validator().validate("static-secret").await,
            Some((UserId::new(1), AuthScheme::StaticToken))
        );
    }
}
