use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::{Role, User};
use crate::modules::user::application::ports::outgoing::user_query::{
    PageRequest, PageResult, UserQuery, UserQueryError, UserWithRole,
};

use super::sea_orm_entity::roles::{Entity as RoleEntity, Model as RoleModel};
use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_view(
        user: UserModel,
        role: Option<RoleModel>,
    ) -> Result<UserWithRole, UserQueryError> {
        // role_id is a non-null FK, so a missing role row means the data
        // itself is broken.
        let role = role.ok_or_else(|| {
            UserQueryError::DatabaseError(format!("missing role row for user {}", user.id))
        })?;

        Ok(UserWithRole {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            is_active: user.is_active,
            is_blocked: user.is_blocked,
            role: Role {
                id: role.id,
                name: role.name,
            },
            created_at: user.created_at.with_timezone(&chrono::Utc),
            updated_at: user.updated_at.with_timezone(&chrono::Utc),
            deleted_at: user.deleted_at.map(|t| t.with_timezone(&chrono::Utc)),
        })
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

fn map_db_err(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn list_active(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<UserWithRole>, UserQueryError> {
        let query = UserEntity::find().filter(UserColumn::DeletedAt.is_null());

        // Total of the full active set, counted before pagination is
        // applied.
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .order_by_desc(UserColumn::CreatedAt)
            .find_also_related(RoleEntity)
            .offset(page.offset())
            .limit(page.per_page)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items: Result<Vec<UserWithRole>, UserQueryError> = rows
            .into_iter()
            .map(|(user, role)| Self::map_to_view(user, role))
            .collect();

        Ok(PageResult {
            items: items?,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn find_active_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithRole>, UserQueryError> {
        let row = UserEntity::find()
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::DeletedAt.is_null())
            .find_also_related(RoleEntity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|(user, role)| Self::map_to_view(user, role))
            .transpose()
    }

    async fn find_including_deleted(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithRole>, UserQueryError> {
        let row = UserEntity::find()
            .filter(UserColumn::Id.eq(user_id))
            .find_also_related(RoleEntity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|(user, role)| Self::map_to_view(user, role))
            .transpose()
    }

    async fn find_login_candidate(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::IsActive.eq(true))
            .filter(UserColumn::IsBlocked.eq(false))
            .filter(UserColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(Self::map_to_user))
    }
}
