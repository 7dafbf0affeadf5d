use crate::modules::user::application::use_cases::force_delete_user::ForceDeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

/// Permanently removes the row, bypassing the soft-delete scope. There is
/// no undo.
#[delete("/api/users/{id}/force")]
pub async fn force_delete_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.force_delete_user_use_case.execute(user_id).await {
        Ok(()) => {
            warn!("user {} permanently deleted", user_id);
            ApiResponse::no_content()
        }
        Err(ForceDeleteUserError::RepositoryError(msg)) => {
            error!("force delete failed for {}: {}", user_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::application::use_cases::force_delete_user::IForceDeleteUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockForceDeleteUseCase {
        result: Result<(), ForceDeleteUserError>,
    }

    #[async_trait]
    impl IForceDeleteUserUseCase for MockForceDeleteUseCase {
        async fn execute(&self, _user_id: Uuid) -> Result<(), ForceDeleteUserError> {
            self.result.clone()
        }
    }

    fn app_state(result: Result<(), ForceDeleteUserError>) -> AppState {
        TestAppStateBuilder::new()
            .with_force_delete_user(Arc::new(MockForceDeleteUseCase { result }))
            .build()
    }

    #[actix_web::test]
    async fn test_force_delete_handler_no_content() {
        let state = app_state(Ok(()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(force_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}/force", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_force_delete_handler_storage_error() {
        let state = app_state(Err(ForceDeleteUserError::RepositoryError(
            "timeout".to_string(),
        )));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(force_delete_user_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/users/{}/force", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
