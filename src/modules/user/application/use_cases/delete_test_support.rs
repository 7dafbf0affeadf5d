//! Shared recording repository for the delete-lifecycle use-case tests.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};

pub struct RecordingRepository {
    fail: bool,
    soft_deleted: Mutex<Vec<Uuid>>,
    restored: Mutex<Vec<Uuid>>,
    force_deleted: Mutex<Vec<Uuid>>,
}

impl RecordingRepository {
    pub fn ok() -> Self {
        Self {
            fail: false,
            soft_deleted: Mutex::new(Vec::new()),
            restored: Mutex::new(Vec::new()),
            force_deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    pub fn soft_deleted(&self) -> Vec<Uuid> {
        self.soft_deleted.lock().unwrap().clone()
    }

    pub fn restored(&self) -> Vec<Uuid> {
        self.restored.lock().unwrap().clone()
    }

    pub fn force_deleted(&self) -> Vec<Uuid> {
        self.force_deleted.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), UserRepositoryError> {
        if self.fail {
            Err(UserRepositoryError::DatabaseError(
                "connection lost".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for RecordingRepository {
    async fn insert(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
        unimplemented!("not used in delete-lifecycle tests")
    }

    async fn update_full_name(
        &self,
        _user_id: Uuid,
        _full_name: String,
    ) -> Result<User, UserRepositoryError> {
        unimplemented!("not used in delete-lifecycle tests")
    }

    async fn soft_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.check()?;
        self.soft_deleted.lock().unwrap().push(user_id);
        Ok(())
    }

    async fn restore(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.check()?;
        self.restored.lock().unwrap().push(user_id);
        Ok(())
    }

    async fn force_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.check()?;
        self.force_deleted.lock().unwrap().push(user_id);
        Ok(())
    }
}
