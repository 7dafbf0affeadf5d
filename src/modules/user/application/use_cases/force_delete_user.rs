use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ForceDeleteUserError {
    RepositoryError(String),
}

impl std::fmt::Display for ForceDeleteUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForceDeleteUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ForceDeleteUserError {}

#[async_trait]
pub trait IForceDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), ForceDeleteUserError>;
}

/// Permanent removal. Works on live and soft-deleted rows alike; there is
/// no way back from this one.
pub struct ForceDeleteUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> ForceDeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IForceDeleteUserUseCase for ForceDeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), ForceDeleteUserError> {
        self.repository
            .force_delete(user_id)
            .await
            .map_err(|e: UserRepositoryError| {
                ForceDeleteUserError::RepositoryError(e.to_string())
            })
    }
}
