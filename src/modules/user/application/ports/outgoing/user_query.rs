use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::{Role, User};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Read projection of a user with its role eagerly loaded.
/// The password hash is deliberately not part of this view.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRole {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub is_blocked: bool,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl PageRequest {
    /// Build a page request from raw query parameters. Absent, non-numeric
    /// or zero values clamp to the defaults (1 and 10) instead of falling
    /// through as zero.
    pub fn clamped(page: Option<&str>, per_page: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, default: u64| {
            raw.and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            page: parse(page, 1),
            per_page: parse(per_page, 10),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.per_page
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    /// Count of the full filtered set, not of the returned page.
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Read side of the user store. Soft-delete scoping is part of the method
/// contract: `list_active` and `find_active_by_id` exclude rows with a
/// deletion marker, `find_including_deleted` does not.
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Page of non-deleted users, newest first, roles eagerly loaded.
    async fn list_active(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<UserWithRole>, UserQueryError>;

    async fn find_active_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithRole>, UserQueryError>;

    /// Lookup bypassing the soft-delete scope.
    async fn find_including_deleted(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserWithRole>, UserQueryError>;

    /// Exact-email lookup restricted to active, unblocked, non-deleted
    /// accounts. Returns the full record because the caller still has to
    /// verify the password hash.
    async fn find_login_candidate(&self, email: &str) -> Result<Option<User>, UserQueryError>;
}
