use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

// ========================= Update Request =========================

/// Partial update: only the full name is mutable through this operation.
/// The narrow DTO makes that contract explicit instead of accepting and
/// silently dropping other fields.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    full_name: String,
}

#[derive(Debug, Clone)]
pub enum UpdateUserRequestError {
    EmptyFullName,
}

impl std::fmt::Display for UpdateUserRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateUserRequestError::EmptyFullName => write!(f, "Full name cannot be empty"),
        }
    }
}

impl std::error::Error for UpdateUserRequestError {}

impl UpdateUserRequest {
    pub fn new(full_name: String) -> Result<Self, UpdateUserRequestError> {
        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(UpdateUserRequestError::EmptyFullName);
        }
        Ok(Self { full_name })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl<'de> Deserialize<'de> for UpdateUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            full_name: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        UpdateUserRequest::new(helper.full_name).map_err(serde::de::Error::custom)
    }
}

// ====================== Error / Response =============================

#[derive(Debug, Clone)]
pub enum UpdateUserError {
    UserNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateUserError::UserNotFound => write!(f, "User not found"),
            UpdateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateUserError {}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role_id: Uuid,
}

// ====================== Use Case =============================

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UpdatedUser, UpdateUserError>;
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UpdatedUser, UpdateUserError> {
        let updated = self
            .repository
            .update_full_name(user_id, request.full_name)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })?;

        Ok(UpdatedUser {
            id: updated.id,
            full_name: updated.full_name,
            email: updated.email,
            phone: updated.phone,
            role_id: updated.role_id,
        })
    }
}
