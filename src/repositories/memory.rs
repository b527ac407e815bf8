//! In-process stores. Same contract as the PostgreSQL ones, including the
//! unique email constraint, which is checked under the write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{EntryRepository, StoreError, StoreResult, UserRepository};
use crate::models::{FinancialEntry, User};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, mut user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(StoreError::DuplicateEmail);
        }

        let id = match user.id {
            Some(id) => {
                let existing = users.get(&id).ok_or(StoreError::NotFound)?;
                user.created_at = existing.created_at;
                id
            }
            None => {
                let id = Uuid::new_v4();
                user.id = Some(id);
                user.created_at = Some(Utc::now());
                id
            }
        };
        users.insert(id, user.clone());
        Ok(user)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEntryRepository {
    entries: Arc<RwLock<HashMap<Uuid, FinancialEntry>>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn save(&self, mut entry: FinancialEntry) -> StoreResult<FinancialEntry> {
        let mut entries = self.entries.write().await;
        let id = match entry.id {
            Some(id) => {
                let existing = entries.get(&id).ok_or(StoreError::NotFound)?;
                entry.created_on = existing.created_on;
                id
            }
            None => {
                let id = Uuid::new_v4();
                entry.id = Some(id);
                entry.created_on = Some(Utc::now().date_naive());
                id
            }
        };
        entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<FinancialEntry>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.entries.write().await.remove(&id).is_some())
    }
}
