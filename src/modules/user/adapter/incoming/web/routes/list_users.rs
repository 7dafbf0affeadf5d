use crate::modules::user::application::ports::outgoing::user_query::PageRequest;
use crate::modules::user::application::use_cases::list_users::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use std::collections::HashMap;
use tracing::error;

/// Paginated list of active users. `page` and `per_page` fall back to
/// 1 and 10 when absent or unusable.
#[get("/api/users")]
pub async fn list_users_handler(
    query: web::Query<HashMap<String, String>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::clamped(
        query.get("page").map(String::as_str),
        query.get("per_page").map(String::as_str),
    );

    match data.list_users_use_case.execute(page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListUsersError::QueryFailed(msg)) => {
            error!("user listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
