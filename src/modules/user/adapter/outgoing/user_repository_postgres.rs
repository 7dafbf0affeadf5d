use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            password_hash: model.password_hash,
            phone: model.phone,
            verification_token: model.verification_token,
            is_active: model.is_active,
            is_blocked: model.is_blocked,
            role_id: model.role_id,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
            deleted_at: model.deleted_at.map(|t| t.with_timezone(&chrono::Utc)),
        }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn insert(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(user.full_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            phone: Set(user.phone),
            verification_token: Set(user.verification_token),
            // None falls through to the schema default.
            is_active: user.is_active.map_or(NotSet, Set),
            is_blocked: user.is_blocked.map_or(NotSet, Set),
            role_id: Set(user.role_id),
            created_at: NotSet,
            updated_at: NotSet,
            deleted_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::EmailTaken;
            }
            map_db_err(e)
        })?;

        Ok(Self::map_to_user(inserted))
    }

    async fn update_full_name(
        &self,
        user_id: Uuid,
        full_name: String,
    ) -> Result<User, UserRepositoryError> {
        // Load-then-save over the active scope; a soft-deleted row is not
        // updatable through this path.
        let user = UserEntity::find()
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.full_name = Set(full_name);

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;

        Ok(Self::map_to_user(updated))
    }

    async fn soft_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        // Marker update with no row-count check: deleting a missing or
        // already-deleted row is a no-op.
        UserEntity::update_many()
            .col_expr(
                UserColumn::DeletedAt,
                Expr::value(chrono::Utc::now().fixed_offset()),
            )
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn restore(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        UserEntity::update_many()
            .col_expr(
                UserColumn::DeletedAt,
                Expr::value(None::<chrono::DateTime<chrono::FixedOffset>>),
            )
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn force_delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        UserEntity::delete_many()
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
