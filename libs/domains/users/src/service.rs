use axum_helpers::JwtAuth;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{AccessToken, CreateUser, LoginRequest, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer for registration and login
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        let user = User::new(input.name, input.email, &input.password)?;
        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    /// Exchange credentials for a signed access token.
    ///
    /// An unknown e-mail and a wrong password both yield `Unauthorized`.
    #[instrument(skip(self))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<AccessToken> {
        let user = match self.repository.find_by_email(&input.email).await {
            Ok(user) => user,
            Err(UserError::NotFound(_)) => return Err(UserError::Unauthorized),
            Err(e) => return Err(e),
        };

        if !user.validate_password(&input.password) {
            return Err(UserError::Unauthorized);
        }

        let access_token = self
            .jwt
            .issue_token(&user.id.to_string())
            .map_err(|e| UserError::TokenIssuance(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Issued access token");
        Ok(AccessToken { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use axum_helpers::JwtConfig;
    use mockall::predicate::eq;

    const SECRET: &str = "unit-test-secret-that-is-32-chars-long";

    fn jwt() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET, 300).unwrap())
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn login_issues_token_for_user_id() {
        let user = User::new("Alice", "alice@example.com", "123456").unwrap();
        let user_id = user.id;

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .with(eq("alice@example.com"))
            .returning(move |_| Ok(user.clone()));

        let service = UserService::new(mock_repo, jwt());
        let token = service
            .login(login("alice@example.com", "123456"))
            .await
            .unwrap();

        let claims = jwt().verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 300);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let user = User::new("Alice", "alice@example.com", "123456").unwrap();

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(move |_| Ok(user.clone()));

        let service = UserService::new(mock_repo, jwt());
        assert!(matches!(
            service.login(login("alice@example.com", "wrong")).await,
            Err(UserError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn unknown_email_is_unauthorized() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(|email| Err(UserError::NotFound(email.to_string())));

        let service = UserService::new(mock_repo, jwt());
        assert!(matches!(
            service.login(login("nobody@example.com", "123456")).await,
            Err(UserError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn storage_failure_during_login_is_not_masked() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(|_| Err(UserError::Storage("pool closed".into())));

        let service = UserService::new(mock_repo, jwt());
        assert!(matches!(
            service.login(login("alice@example.com", "123456")).await,
            Err(UserError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn create_user_persists_hashed_user() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .withf(|u| u.email == "bob@example.com" && u.validate_password("s3cret"))
            .times(1)
            .returning(Ok);

        let service = UserService::new(mock_repo, jwt());
        let created = service
            .create_user(CreateUser {
                name: "Bob".into(),
                email: "bob@example.com".into(),
                password: "s3cret".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Bob");
    }

    #[tokio::test]
    async fn create_user_validation_skips_storage() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo, jwt());
        let result = service
            .create_user(CreateUser {
                name: "Bob".into(),
                email: String::new(),
                password: "s3cret".into(),
            })
            .await;

        assert!(matches!(result, Err(UserError::EmailRequired)));
    }

    #[tokio::test]
    async fn duplicate_email_propagates() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .returning(|u| Err(UserError::DuplicateEmail(u.email)));

        let service = UserService::new(mock_repo, jwt());
        let result = service
            .create_user(CreateUser {
                name: "Bob".into(),
                email: "bob@example.com".into(),
                password: "s3cret".into(),
            })
            .await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }
}
