//! Record stores: the persistence boundary for users and financial entries.
//!
//! Services only see these traits. `db` provides the PostgreSQL implementations,
//! `memory` the in-process ones.

mod memory;

pub use memory::{InMemoryEntryRepository, InMemoryUserRepository};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{FinancialEntry, User};

#[derive(Error, Debug)]
pub enum StoreError {
    /// The unique constraint on user email was hit.
    #[error("email already registered")]
    DuplicateEmail,

    /// Update of a record whose id does not exist.
    #[error("record not found")]
    NotFound,

    /// A stored row that cannot be mapped back to its model.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// True iff a user with exactly this email exists.
    async fn exists_by_email(&self, email: &str) -> StoreResult<bool>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Insert when `user.id` is `None`, otherwise update. Returns the persisted record.
    async fn save(&self, user: User) -> StoreResult<User>;
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert when `entry.id` is `None`, otherwise update. Returns the persisted record.
    async fn save(&self, entry: FinancialEntry) -> StoreResult<FinancialEntry>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<FinancialEntry>>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
