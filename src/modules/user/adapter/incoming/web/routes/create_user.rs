use crate::modules::user::application::use_cases::create_user::{
    CreateUserError, CreateUserRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

/// Admin-side create. The payload carries the account flags explicitly;
/// validation happens in the request deserializer.
#[post("/api/users")]
pub async fn create_user_handler(
    payload: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();
    let email = request.email().to_string();

    match data.create_user_use_case.execute(request).await {
        Ok(created) => ApiResponse::created(created),

        Err(err @ CreateUserError::EmailTaken) => {
            ApiResponse::conflict("EMAIL_TAKEN", &err.to_string())
        }

        Err(CreateUserError::HashingFailed(msg)) => {
            error!("password hashing failed for {}: {}", email, msg);
            ApiResponse::internal_error()
        }

        Err(CreateUserError::RepositoryError(msg)) => {
            error!("user insert failed for {}: {}", email, msg);
            ApiResponse::internal_error()
        }
    }
}
