use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserWithRole,
};

#[derive(Debug, Clone)]
pub enum GetUserError {
    UserNotFound,
    QueryFailed(String),
}

impl std::fmt::Display for GetUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetUserError::UserNotFound => write!(f, "User not found"),
            GetUserError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for GetUserError {}

#[async_trait]
pub trait IGetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserWithRole, GetUserError>;
}

/// FindById over the active scope; soft-deleted users read as not found.
pub struct GetUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetUserUseCase for GetUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserWithRole, GetUserError> {
        self.query
            .find_active_by_id(user_id)
            .await
            .map_err(|UserQueryError::DatabaseError(msg)| GetUserError::QueryFailed(msg))?
            .ok_or(GetUserError::UserNotFound)
    }
}
