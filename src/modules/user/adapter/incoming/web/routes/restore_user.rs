use crate::modules::user::application::use_cases::restore_user::RestoreUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Clears the deletion marker so the user shows up in listings again.
#[put("/api/users/{id}/restore")]
pub async fn restore_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.restore_user_use_case.execute(user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(RestoreUserError::RepositoryError(msg)) => {
            error!("restore failed for {}: {}", user_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::application::use_cases::restore_user::IRestoreUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockRestoreUseCase {
        result: Result<(), RestoreUserError>,
    }

    #[async_trait]
    impl IRestoreUserUseCase for MockRestoreUseCase {
        async fn execute(&self, _user_id: Uuid) -> Result<(), RestoreUserError> {
            self.result.clone()
        }
    }

    fn app_state(result: Result<(), RestoreUserError>) -> AppState {
        TestAppStateBuilder::new()
            .with_restore_user(Arc::new(MockRestoreUseCase { result }))
            .build()
    }

    #[actix_web::test]
    async fn test_restore_handler_no_content() {
        let state = app_state(Ok(()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(restore_user_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}/restore", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_restore_handler_storage_error() {
        let state = app_state(Err(RestoreUserError::RepositoryError(
            "timeout".to_string(),
        )));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(restore_user_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}/restore", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
