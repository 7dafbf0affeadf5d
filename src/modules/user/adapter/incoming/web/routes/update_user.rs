use crate::modules::user::application::use_cases::update_user::{
    UpdateUserError, UpdateUserRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Renames an active user. Only the full name is mutable here.
#[put("/api/users/{id}")]
pub async fn update_user_handler(
    path: web::Path<Uuid>,
    payload: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .update_user_use_case
        .execute(user_id, payload.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(err @ UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", &err.to_string())
        }

        Err(UpdateUserError::RepositoryError(msg)) => {
            error!("user update failed for {}: {}", user_id, msg);
            ApiResponse::internal_error()
        }
    }
}
