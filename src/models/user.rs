//! User account record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::password;

/// An account. `id` and `created_at` stay `None` until the store persists the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never the plain password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Unsaved user with an already hashed password.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: None,
        }
    }

    /// Unsaved user from a plain password, hashed here.
    pub fn with_password(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> AppResult<Self> {
        let hash = password::hash_password(password)?;
        Ok(Self::new(name, email, hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_password_hashes() {
        let user = User::with_password("usuario", "usuario@email.com", "senha123").unwrap();
        assert_ne!(user.password_hash, "senha123");
        assert!(password::verify_password("senha123", &user.password_hash).unwrap());
        assert!(user.id.is_none());
    }

    #[test]
    fn serialization_omits_hash() {
        let user = User::new("usuario", "usuario@email.com", "$argon2id$fake");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "usuario@email.com");
    }
}
