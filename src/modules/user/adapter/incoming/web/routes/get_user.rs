use crate::modules::user::application::use_cases::get_user::GetUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Single active user by id, role included. Soft-deleted users read as
/// not found here.
#[get("/api/users/{id}")]
pub async fn get_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.get_user_use_case.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(err @ GetUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }
        Err(GetUserError::QueryFailed(msg)) => {
            error!("user lookup failed for {}: {}", user_id, msg);
            ApiResponse::internal_error()
        }
    }
}
