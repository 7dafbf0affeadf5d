use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::modules::user::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    token_issuer::AccessTokenIssuer,
    user_query::UserQuery,
};
use email_address::EmailAddress;

// ========================= Login Request =========================

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone)]
pub enum LoginError {
    /// Email does not match an active, unblocked account. One message for
    /// all three causes so callers cannot probe account state.
    AccountNotFound,
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::AccountNotFound => write!(f, "account not found or not registered"),
            LoginError::InvalidCredentials => write!(f, "incorrect email or password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed => write!(f, "failed to generate access token"),
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================

/// User projection returned on login. The password hash is stripped here
/// on purpose.
#[derive(Debug, Clone, Serialize)]
pub struct LoggedInUser {
    pub id: uuid::Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role_id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub user: LoggedInUser,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_issuer: Arc<dyn AccessTokenIssuer + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_issuer: Arc<dyn AccessTokenIssuer + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_issuer,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // The candidate query is already scoped to active, unblocked,
        // non-deleted accounts. A storage error collapses into the same
        // message as a miss; the cause is logged first.
        let user = self
            .query
            .find_login_candidate(request.email())
            .await
            .map_err(|e| {
                error!("login candidate lookup failed: {}", e);
                LoginError::AccountNotFound
            })?
            .ok_or(LoginError::AccountNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_issuer
            .issue_access_token(user.id)
            .map_err(|e| {
                error!("access token issuance failed for {}: {}", user.id, e);
                LoginError::TokenGenerationFailed
            })?;

        Ok(LoginUserResponse {
            access_token,
            user: LoggedInUser {
                id: user.id,
                full_name: user.full_name,
                email: user.email,
                phone: user.phone,
                role_id: user.role_id,
            },
        })
    }
}
