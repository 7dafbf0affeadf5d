use crate::modules::user::application::use_cases::{
    create_user::ICreateUserUseCase, force_delete_user::IForceDeleteUserUseCase,
    get_user::IGetUserUseCase, list_users::IListUsersUseCase, login_user::ILoginUserUseCase,
    register_user::IRegisterUserUseCase, restore_user::IRestoreUserUseCase,
    soft_delete_user::ISoftDeleteUserUseCase, update_user::IUpdateUserUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use std::sync::Arc;

/// Builds an `AppState` where every use case is a stub, then lets a test
/// swap in the one double it actually cares about.
pub struct TestAppStateBuilder {
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    get_user: Arc<dyn IGetUserUseCase + Send + Sync>,
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    soft_delete_user: Arc<dyn ISoftDeleteUserUseCase + Send + Sync>,
    restore_user: Arc<dyn IRestoreUserUseCase + Send + Sync>,
    force_delete_user: Arc<dyn IForceDeleteUserUseCase + Send + Sync>,
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_users: Arc::new(StubListUsersUseCase),
            get_user: Arc::new(StubGetUserUseCase),
            create_user: Arc::new(StubCreateUserUseCase),
            update_user: Arc::new(StubUpdateUserUseCase),
            soft_delete_user: Arc::new(StubSoftDeleteUserUseCase),
            restore_user: Arc::new(StubRestoreUserUseCase),
            force_delete_user: Arc::new(StubForceDeleteUserUseCase),
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_users(mut self, uc: Arc<dyn IListUsersUseCase + Send + Sync>) -> Self {
        self.list_users = uc;
        self
    }

    pub fn with_get_user(mut self, uc: Arc<dyn IGetUserUseCase + Send + Sync>) -> Self {
        self.get_user = uc;
        self
    }

    pub fn with_create_user(mut self, uc: Arc<dyn ICreateUserUseCase + Send + Sync>) -> Self {
        self.create_user = uc;
        self
    }

    pub fn with_update_user(mut self, uc: Arc<dyn IUpdateUserUseCase + Send + Sync>) -> Self {
        self.update_user = uc;
        self
    }

    pub fn with_soft_delete_user(
        mut self,
        uc: Arc<dyn ISoftDeleteUserUseCase + Send + Sync>,
    ) -> Self {
        self.soft_delete_user = uc;
        self
    }

    pub fn with_restore_user(mut self, uc: Arc<dyn IRestoreUserUseCase + Send + Sync>) -> Self {
        self.restore_user = uc;
        self
    }

    pub fn with_force_delete_user(
        mut self,
        uc: Arc<dyn IForceDeleteUserUseCase + Send + Sync>,
    ) -> Self {
        self.force_delete_user = uc;
        self
    }

    pub fn with_register_user(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register_user = uc;
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.login_user = uc;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            list_users_use_case: self.list_users,
            get_user_use_case: self.get_user,
            create_user_use_case: self.create_user,
            update_user_use_case: self.update_user,
            soft_delete_user_use_case: self.soft_delete_user,
            restore_user_use_case: self.restore_user,
            force_delete_user_use_case: self.force_delete_user,
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
        }
    }
}
