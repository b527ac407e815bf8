//! PostgreSQL user store. Email uniqueness is the `users_email_key` constraint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::debug;
use uuid::Uuid;

use super::DbPool;
use crate::models::User;
use crate::repositories::{StoreError, StoreResult, UserRepository};

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: Some(row.created_at),
        }
    }
}

/// Unique violations on `users` can only come from the email index.
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            debug!(constraint = ?db.constraint(), "unique violation on users");
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Db(err)
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn save(&self, user: User) -> StoreResult<User> {
        let row = match user.id {
            None => sqlx::query_as::<_, UserRow>(
                r#"
                INSERT INTO users (name, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, password_hash, created_at
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?,
            Some(id) => sqlx::query_as::<_, UserRow>(
                r#"
                UPDATE users SET name = $2, email = $3, password_hash = $4
                WHERE id = $1
                RETURNING id, name, email, password_hash, created_at
                "#,
            )
            .bind(id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or(StoreError::NotFound)?,
        };
        Ok(row.into())
    }
}
