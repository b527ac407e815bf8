//! User service: credential checks and the unique-email rule.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::{StoreError, UserRepository};
use crate::services::password;

pub const USER_NOT_FOUND: &str = "User not found for the given email";
pub const INVALID_PASSWORD: &str = "Invalid password";
pub const EMAIL_TAKEN: &str = "A user with this email is already registered";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Returns the user whose email matches exactly and whose stored hash verifies `password`.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                debug!("no user for email");
                AppError::Authentication(USER_NOT_FOUND.to_string())
            })?;

        if !password::verify_password(password, &user.password_hash)? {
            debug!(user_id = ?user.id, "password mismatch");
            return Err(AppError::Authentication(INVALID_PASSWORD.to_string()));
        }

        info!(user_id = ?user.id, "user authenticated");
        Ok(user)
    }

    /// Checks the email is free, then saves. A unique violation raised by the store
    /// (two saves racing past the check) is reported the same way as the check itself.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn save_user(&self, user: User) -> AppResult<User> {
        self.validate_email(&user.email).await?;

        let saved = self.repo.save(user).await.map_err(|e| match e {
            StoreError::DuplicateEmail => {
                debug!("duplicate email rejected by store");
                AppError::BusinessRule(EMAIL_TAKEN.to_string())
            }
            other => AppError::Store(other),
        })?;

        info!(user_id = ?saved.id, "user saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn validate_email(&self, email: &str) -> AppResult<()> {
        if self.repo.exists_by_email(email).await? {
            debug!("email already registered");
            return Err(AppError::BusinessRule(EMAIL_TAKEN.to_string()));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
