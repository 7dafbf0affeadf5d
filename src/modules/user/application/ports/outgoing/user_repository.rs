use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::User;

/// Fields needed to persist a new user. `is_active`/`is_blocked` left as
/// `None` fall through to the schema defaults, which is what registration
/// relies on.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub verification_token: Option<String>,
    pub is_active: Option<bool>,
    pub is_blocked: Option<bool>,
    pub role_id: Uuid,
}

/// Write side of the user store.
///
/// The delete-lifecycle methods are idempotent: soft-deleting, restoring or
/// force-deleting an id that does not match any row is a no-op, not an
/// error, zero affected rows is not an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Partial update: only the full name is mutable through this path.
    async fn update_full_name(
        &self,
        user_id: Uuid,
        full_name: String,
    ) -> Result<User, UserRepositoryError>;

    /// Sets the deletion marker on a non-deleted row.
    async fn soft_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// Clears the deletion marker, bypassing the soft-delete scope.
    async fn restore(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// Permanent removal, bypassing the soft-delete scope.
    async fn force_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, Clone)]
pub enum UserRepositoryError {
    EmailTaken,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::EmailTaken => write!(f, "Email is already taken"),
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
