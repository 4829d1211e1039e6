use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Persistence for users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, `DuplicateEmail` if the address is taken
    async fn create(&self, user: User) -> UserResult<User>;

    /// Look a user up by e-mail, `NotFound` if absent
    async fn find_by_email(&self, email: &str) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.insert(user.email.clone(), user.clone());
        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("Alice", "alice@example.com", "123456").unwrap();

        repo.create(user.clone()).await.unwrap();
        assert_eq!(repo.find_by_email("alice@example.com").await.unwrap(), user);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Alice", "alice@example.com", "pw").unwrap())
            .await
            .unwrap();

        let second = User::new("Alice 2", "alice@example.com", "pw2").unwrap();
        assert!(matches!(
            repo.create(second).await,
            Err(UserError::DuplicateEmail(email)) if email == "alice@example.com"
        ));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let repo = InMemoryUserRepository::new();
        assert!(matches!(
            repo.find_by_email("nobody@example.com").await,
            Err(UserError::NotFound(_))
        ));
    }
}
