use core_config::{ConfigError, FromEnv, env_parse_or_default, env_required};

/// Shortest accepted HS256 secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Token lifetime when `JWT_EXPIRES_IN` is not set.
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 300;

/// Signing secret and token lifetime.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_EXPIRES_IN` (seconds, default 300, must be positive)
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expires_in_secs: u64) -> Result<Self, ConfigError> {
        let secret = secret.into();

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        if expires_in_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "JWT_EXPIRES_IN".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            secret,
            expires_in_secs,
        })
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        let expires_in_secs =
            env_parse_or_default("JWT_EXPIRES_IN", &DEFAULT_EXPIRES_IN_SECS.to_string())?;

        Self::new(secret, expires_in_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(SECRET, 60).unwrap();
        assert_eq!(config.secret, SECRET);
        assert_eq!(config.expires_in_secs, 60);
    }

    #[test]
    fn test_jwt_config_new_too_short() {
        let err = JwtConfig::new("short", 60).unwrap_err();
        assert!(err.to_string().contains("32 characters"));
    }

    #[test]
    fn test_jwt_config_new_zero_expiry() {
        let err = JwtConfig::new(SECRET, 0).unwrap_err();
        assert!(err.to_string().contains("JWT_EXPIRES_IN"));
    }

    #[test]
    fn test_jwt_config_debug_redacts_secret() {
        let config = JwtConfig::new(SECRET, 60).unwrap();
        assert!(!format!("{config:?}").contains(SECRET));
    }

    #[test]
    fn test_jwt_config_from_env_defaults_expiry() {
        temp_env::with_vars(
            [("JWT_SECRET", Some(SECRET)), ("JWT_EXPIRES_IN", None)],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.expires_in_secs, DEFAULT_EXPIRES_IN_SECS);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_custom_expiry() {
        temp_env::with_vars(
            [("JWT_SECRET", Some(SECRET)), ("JWT_EXPIRES_IN", Some("3600"))],
            || {
                assert_eq!(JwtConfig::from_env().unwrap().expires_in_secs, 3600);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_missing_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_jwt_config_from_env_bad_expiry() {
        for bad in ["soon", "-5", "0"] {
            temp_env::with_vars(
                [("JWT_SECRET", Some(SECRET)), ("JWT_EXPIRES_IN", Some(bad))],
                || {
                    let err = JwtConfig::from_env().unwrap_err();
                    assert!(err.to_string().contains("JWT_EXPIRES_IN"));
                },
            );
        }
    }
}
