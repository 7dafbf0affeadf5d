use crate::modules::user::application::use_cases::soft_delete_user::SoftDeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Marks a user as deleted. Idempotent, already-deleted and unknown ids
/// succeed the same way.
#[delete("/api/users/{id}")]
pub async fn soft_delete_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.soft_delete_user_use_case.execute(user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SoftDeleteUserError::RepositoryError(msg)) => {
            error!("soft delete failed for {}: {}", user_id, msg);
            ApiResponse::internal_error()
        }
    }
}
