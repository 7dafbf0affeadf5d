use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum RestoreUserError {
    RepositoryError(String),
}

impl std::fmt::Display for RestoreUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestoreUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RestoreUserError {}

#[async_trait]
pub trait IRestoreUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), RestoreUserError>;
}

/// Clears the deletion marker, bypassing the active scope. Restoring a user
/// that was never deleted is a no-op.
pub struct RestoreUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> RestoreUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IRestoreUserUseCase for RestoreUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), RestoreUserError> {
        self.repository
            .restore(user_id)
            .await
            .map_err(|e: UserRepositoryError| RestoreUserError::RepositoryError(e.to_string()))
    }
}
