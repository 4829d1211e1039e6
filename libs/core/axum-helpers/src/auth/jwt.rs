use super::config::JwtConfig;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Registered claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User id
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration time (Unix seconds)
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// HS256 signer and verifier with a fixed token lifetime.
#[derive(Clone)]
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expires_in_secs: i64::try_from(config.expires_in_secs).unwrap_or(i64::MAX),
        }
    }

    /// Sign a token for `subject` valid from now for the configured lifetime.
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(self.expires_in_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, TokenError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    fn auth(expires_in: u64) -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET, expires_in).unwrap())
    }

    #[test]
    fn issued_token_round_trips_subject_and_expiry() {
        let auth = auth(300);
        let before = Utc::now().timestamp();
        let token = auth.issue_token("0190f7a4-0000-7000-8000-000000000001").unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "0190f7a4-0000-7000-8000-000000000001");
        assert!(claims.iat >= before);
        assert_eq!(claims.exp - claims.iat, 300);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let other = JwtAuth::new(
            &JwtConfig::new("another-secret-that-is-32-chars-long!!", 300).unwrap(),
        );
        let token = other.issue_token("user").unwrap();

        assert!(matches!(
            auth(300).verify_token(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: "user".to_string(),
            iat: now - 120,
            exp: now - 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(auth(300).verify_token(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(auth(300).verify_token("not.a.jwt").is_err());
        assert!(auth(300).verify_token("").is_err());
    }
}
