use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    user_repository::{NewUser, UserRepository, UserRepositoryError},
};
use email_address::EmailAddress;

// ========================= Create Request =========================

/// Validated admin-side create request. Unlike registration this sets the
/// account flags explicitly.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    full_name: String,
    email: String,
    password: String,
    phone: String,
    verification_token: Option<String>,
    is_active: bool,
    is_blocked: bool,
    role_id: Uuid,
}

#[derive(Debug, Clone)]
pub enum CreateUserRequestError {
    EmptyFullName,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for CreateUserRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateUserRequestError::EmptyFullName => write!(f, "Full name cannot be empty"),
            CreateUserRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            CreateUserRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for CreateUserRequestError {}

impl CreateUserRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: String,
        email: String,
        password: String,
        phone: String,
        verification_token: Option<String>,
        is_active: bool,
        is_blocked: bool,
        role_id: Uuid,
    ) -> Result<Self, CreateUserRequestError> {
        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(CreateUserRequestError::EmptyFullName);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(CreateUserRequestError::EmptyPassword);
        }

        Ok(Self {
            full_name,
            email,
            password,
            phone,
            verification_token,
            is_active,
            is_blocked,
            role_id,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            full_name: String,
            email: String,
            password: String,
            #[serde(default)]
            phone: String,
            verification_token: Option<String>,
            #[serde(default)]
            is_active: bool,
            #[serde(default)]
            is_blocked: bool,
            role_id: Uuid,
        }

        let h = Helper::deserialize(deserializer)?;
        CreateUserRequest::new(
            h.full_name,
            h.email,
            h.password,
            h.phone,
            h.verification_token,
            h.is_active,
            h.is_blocked,
            h.role_id,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ====================== Create Error =============================

#[derive(Debug, Clone)]
pub enum CreateUserError {
    EmailTaken,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreateUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateUserError::EmailTaken => write!(f, "Email is already taken"),
            CreateUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            CreateUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateUserError {}

// ====================== Response =============================

#[derive(Debug, Clone, Serialize)]
pub struct CreatedUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub is_blocked: bool,
    pub role_id: Uuid,
}

// ====================== Use Case =============================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, request: CreateUserRequest) -> Result<CreatedUser, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> ICreateUserUseCase for CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: CreateUserRequest) -> Result<CreatedUser, CreateUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let stored = self
            .repository
            .insert(NewUser {
                full_name: request.full_name,
                email: request.email,
                password_hash,
                phone: request.phone,
                verification_token: request.verification_token,
                is_active: Some(request.is_active),
                is_blocked: Some(request.is_blocked),
                role_id: request.role_id,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailTaken => CreateUserError::EmailTaken,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        Ok(CreatedUser {
            id: stored.id,
            full_name: stored.full_name,
            email: stored.email,
            phone: stored.phone,
            is_active: stored.is_active,
            is_blocked: stored.is_blocked,
            role_id: stored.role_id,
        })
    }
}
