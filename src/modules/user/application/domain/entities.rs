use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Full user record as stored, including the password hash and the
/// soft-delete marker. Never serialized to clients as-is.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub verification_token: Option<String>,
    pub is_active: bool,
    pub is_blocked: bool,
    pub role_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}
