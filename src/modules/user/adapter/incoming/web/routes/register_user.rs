use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::user::application::use_cases::register_user::{
    RegisterError, RegisterRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use utoipa::ToSchema;

/// Registration request from client
#[derive(serde::Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Full name
    #[schema(example = "Jane Doe")]
    pub full_name: String,

    /// Email address
    #[schema(example = "a@x.com")]
    pub email: String,

    /// Password
    #[schema(example = "secret")]
    pub password: String,

    /// Phone number; defaults to empty when omitted
    #[schema(example = "555-0100")]
    pub phone: Option<String>,

    /// Email-verification token; stored even when empty
    pub verification_token: Option<String>,

    /// Role ID
    pub role_id: Uuid,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// User ID (UUID)
    id: String,

    /// Full name
    full_name: String,

    /// Email address
    email: String,

    /// Phone number
    phone: String,

    /// Role ID (UUID)
    role_id: String,
}

/// User registration
///
/// Creates an account with the schema-default flags; the account becomes
/// active through the verification flow. Storage failures surface as one
/// fixed message.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (
            status = 201,
            description = "Account registered",
            body = inline(SuccessResponse<RegisterUserResponse>),
        ),
        (status = 400, description = "Malformed request or registration failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    payload: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();
    let email = request.email().to_string();

    match data.register_user_use_case.execute(request).await {
        Ok(registered) => ApiResponse::created(RegisterUserResponse {
            id: registered.id.to_string(),
            full_name: registered.full_name,
            email: registered.email,
            phone: registered.phone,
            role_id: registered.role_id.to_string(),
        }),

        Err(RegisterError::HashingFailed(msg)) => {
            error!("registration hashing failed for {}: {}", email, msg);
            ApiResponse::internal_error()
        }

        Err(err @ RegisterError::RegistrationFailed) => {
            // Cause already logged by the use case.
            ApiResponse::bad_request("REGISTRATION_FAILED", &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisteredUser,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockRegisterUseCase {
        result: Result<RegisteredUser, RegisterError>,
    }

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterUseCase {
        async fn execute(
            &self,
            _request: RegisterRequest,
        ) -> Result<RegisteredUser, RegisterError> {
            self.result.clone()
        }
    }

    fn app_state(result: Result<RegisteredUser, RegisterError>) -> AppState {
        TestAppStateBuilder::new()
            .with_register_user(Arc::new(MockRegisterUseCase { result }))
            .build()
    }

    #[actix_web::test]
    async fn test_register_handler_created() {
        let state = app_state(Ok(RegisteredUser {
            id: Uuid::new_v4(),
            full_name: "Jane Doe".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
            role_id: Uuid::new_v4(),
        }));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "full_name": "Jane Doe",
                "email": "a@x.com",
                "password": "secret",
                "role_id": Uuid::new_v4(),
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_register_handler_fixed_failure_message() {
        let state = app_state(Err(RegisterError::RegistrationFailed));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "full_name": "Jane Doe",
                "email": "a@x.com",
                "password": "secret",
                "role_id": Uuid::new_v4(),
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "failed to register account");
    }

    #[actix_web::test]
    async fn test_register_handler_rejects_non_uuid_role_id() {
        let state = app_state(Err(RegisterError::RegistrationFailed));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "full_name": "Jane Doe",
                "email": "a@x.com",
                "password": "secret",
                "role_id": "not-a-uuid",
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
