use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// User entity - matches the `users` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Lookup key for login; uniqueness is enforced by storage
    pub email: String,
    /// Argon2id PHC string, never the plaintext
    pub password_hash: String,
}

impl User {
    /// Validate the fields and hash `password` with a fresh random salt.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: &str) -> UserResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(UserError::NameRequired);
        }
        if email.is_empty() {
            return Err(UserError::EmailRequired);
        }
        if password.is_empty() {
            return Err(UserError::PasswordRequired);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            email,
            password_hash,
        })
    }

    /// Constant-time comparison against the stored hash. Any failure,
    /// including an unparsable hash, is a mismatch.
    pub fn validate_password(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Request body for `POST /users`. Missing fields surface as the entity's
/// `... is required` errors.
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /users/auth`
#[derive(Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Passwords are redacted.
impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response of a successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    pub access_token: String,
}
