use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend, DbErr, FromQueryResult, SqlErr, Statement};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository using raw statements
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

fn insert_error(err: DbErr, email: &str) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail(email.to_string()),
        _ => err.into(),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let sql = r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.id.into(),
                user.name.clone().into(),
                user.email.clone().into(),
                user.password_hash.clone().into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| insert_error(e, &user.email))?
            .ok_or_else(|| UserError::Storage("insert returned no row".to_string()))?;

        tracing::info!(user_id = %row.id, "Created user");
        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        let sql = "SELECT id, name, email, password_hash FROM users WHERE email = $1";
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [email.into()]);

        UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or_else(|| UserError::NotFound(email.to_string()))
    }
}
