use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum TokenError {
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}

impl Error for TokenError {}

/// Capability to mint an access token for a user id. Token format and
/// lifetime are the adapter's concern.
pub trait AccessTokenIssuer: Send + Sync {
    fn issue_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
}
