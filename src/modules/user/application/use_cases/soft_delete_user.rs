use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum SoftDeleteUserError {
    RepositoryError(String),
}

impl std::fmt::Display for SoftDeleteUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoftDeleteUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for SoftDeleteUserError {}

#[async_trait]
pub trait ISoftDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), SoftDeleteUserError>;
}

/// Sets the deletion marker. Deleting an id that matches no live row is a
/// no-op.
pub struct SoftDeleteUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> SoftDeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISoftDeleteUserUseCase for SoftDeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), SoftDeleteUserError> {
        self.repository
            .soft_delete(user_id)
            .await
            .map_err(|e: UserRepositoryError| SoftDeleteUserError::RepositoryError(e.to_string()))
    }
}
