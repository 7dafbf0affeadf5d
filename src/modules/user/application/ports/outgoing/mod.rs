pub mod password_hasher;
pub mod token_issuer;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::PasswordHasher;
pub use token_issuer::AccessTokenIssuer;
pub use user_query::UserQuery;
pub use user_repository::UserRepository;
