use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("name is required")]
    NameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("user with email '{0}' not found")]
    NotFound(String),

    #[error("user with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("invalid email or password")]
    Unauthorized,

    #[error("password hashing error: {0}")]
    PasswordHash(String),

    #[error("token issuance error: {0}")]
    TokenIssuance(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl UserError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UserError::NameRequired | UserError::EmailRequired | UserError::PasswordRequired
        )
    }
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DbErr> for UserError {
    fn from(err: DbErr) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            e if e.is_validation() => AppError::BadRequest(e.to_string()),
            e @ UserError::NotFound(_) => AppError::NotFound(e.to_string()),
            e @ UserError::DuplicateEmail(_) => AppError::Conflict(e.to_string()),
            e @ UserError::Unauthorized => AppError::Unauthorized(e.to_string()),
            e => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
