use async_trait::async_trait;

use crate::modules::user::application::ports::outgoing::user_query::{
    PageRequest, PageResult, UserQuery, UserQueryError, UserWithRole,
};

#[derive(Debug, Clone)]
pub enum ListUsersError {
    QueryFailed(String),
}

impl std::fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUsersError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest)
        -> Result<PageResult<UserWithRole>, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<UserWithRole>, ListUsersError> {
        self.query
            .list_active(page)
            .await
            .map_err(|UserQueryError::DatabaseError(msg)| ListUsersError::QueryFailed(msg))
    }
}
