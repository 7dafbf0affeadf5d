use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::user::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    user_repository::{NewUser, UserRepository},
};
use email_address::EmailAddress;

// ========================= Register Request =========================

/// Self-service registration. The account flags are not part of the
/// request; they fall through to the schema defaults and the account is
/// activated later through the verification flow.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    full_name: String,
    email: String,
    password: String,
    phone: String,
    verification_token: String,
    role_id: Uuid,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyFullName,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyFullName => write!(f, "Full name cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(
        full_name: String,
        email: String,
        password: String,
        phone: String,
        verification_token: String,
        role_id: Uuid,
    ) -> Result<Self, RegisterRequestError> {
        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(RegisterRequestError::EmptyFullName);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(Self {
            full_name,
            email,
            password,
            phone,
            verification_token,
            role_id,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl<'de> Deserialize<'de> for RegisterRequest {
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
            #[serde(default)]
            verification_token: String,
            role_id: Uuid,
        }

        let h = Helper::deserialize(deserializer)?;
        RegisterRequest::new(
            h.full_name,
            h.email,
            h.password,
            h.phone,
            h.verification_token,
            h.role_id,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================

#[derive(Debug, Clone)]
pub enum RegisterError {
    HashingFailed(String),
    /// Any storage failure. The underlying cause is logged and then
    /// replaced with this fixed message.
    RegistrationFailed,
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::RegistrationFailed => write!(f, "failed to register account"),
        }
    }
}

impl std::error::Error for RegisterError {}

// ====================== Response =============================

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role_id: Uuid,
}

// ====================== Use Case =============================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
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
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let stored = self
            .repository
            .insert(NewUser {
                full_name: request.full_name,
                email: request.email,
                password_hash,
                phone: request.phone,
                // Present even when empty, unlike the admin create path.
                verification_token: Some(request.verification_token),
                is_active: None,
                is_blocked: None,
                role_id: request.role_id,
            })
            .await
            .map_err(|e| {
                error!("registration insert failed: {}", e);
                RegisterError::RegistrationFailed
            })?;

        Ok(RegisteredUser {
            id: stored.id,
            full_name: stored.full_name,
            email: stored.email,
            phone: stored.phone,
            role_id: stored.role_id,
        })
    }
}
