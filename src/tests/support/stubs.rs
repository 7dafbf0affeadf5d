use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::user_query::{
    PageRequest, PageResult, UserWithRole,
};
use crate::modules::user::application::use_cases::{
    create_user::{CreateUserError, CreateUserRequest, CreatedUser, ICreateUserUseCase},
    force_delete_user::{ForceDeleteUserError, IForceDeleteUserUseCase},
    get_user::{GetUserError, IGetUserUseCase},
    list_users::{IListUsersUseCase, ListUsersError},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    register_user::{IRegisterUserUseCase, RegisterError, RegisterRequest, RegisteredUser},
    restore_user::{IRestoreUserUseCase, RestoreUserError},
    soft_delete_user::{ISoftDeleteUserUseCase, SoftDeleteUserError},
    update_user::{IUpdateUserUseCase, UpdateUserError, UpdateUserRequest, UpdatedUser},
};

// Default use-case doubles for TestAppStateBuilder. Each one fails with a
// recognizable message so a handler test that hits the wrong use case
// surfaces it immediately.

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _page: PageRequest,
    ) -> Result<PageResult<UserWithRole>, ListUsersError> {
        Err(ListUsersError::QueryFailed("not used in this test".into()))
    }
}

pub struct StubGetUserUseCase;

#[async_trait]
impl IGetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserWithRole, GetUserError> {
        Err(GetUserError::QueryFailed("not used in this test".into()))
    }
}

pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _request: CreateUserRequest) -> Result<CreatedUser, CreateUserError> {
        Err(CreateUserError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: UpdateUserRequest,
    ) -> Result<UpdatedUser, UpdateUserError> {
        Err(UpdateUserError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubSoftDeleteUserUseCase;

#[async_trait]
impl ISoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), SoftDeleteUserError> {
        Err(SoftDeleteUserError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubRestoreUserUseCase;

#[async_trait]
impl IRestoreUserUseCase for StubRestoreUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), RestoreUserError> {
        Err(RestoreUserError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubForceDeleteUserUseCase;

#[async_trait]
impl IForceDeleteUserUseCase for StubForceDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), ForceDeleteUserError> {
        Err(ForceDeleteUserError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        Err(RegisterError::RegistrationFailed)
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::AccountNotFound)
    }
}
