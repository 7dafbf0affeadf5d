use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::user::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::Serialize;
use tracing::{error, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(serde::Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "a@x.com")]
    pub email: String,

    /// Password
    #[schema(example = "secret")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Full name
    #[schema(example = "Jane Doe")]
    full_name: String,

    /// Email address
    #[schema(example = "a@x.com")]
    email: String,

    /// Phone number
    #[schema(example = "555-0100")]
    phone: String,

    /// Role ID (UUID)
    role_id: String,
}

/// User login
///
/// Authenticates a user with email and password, returns a JWT access token.
/// Unknown, inactive and blocked accounts all produce the same error.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
        ),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Authentication failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    payload: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.into_inner();
    let email = request.email().to_string();

    match data.login_user_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(LoginResponse {
            access_token: response.access_token,
            user: LoginUserInfo {
                id: response.user.id.to_string(),
                full_name: response.user.full_name,
                email: response.user.email,
                phone: response.user.phone,
                role_id: response.user.role_id.to_string(),
            },
        }),

        Err(err @ LoginError::AccountNotFound) => {
            warn!("login rejected for {}: no matching account", email);
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", &err.to_string())
        }

        Err(err @ LoginError::InvalidCredentials) => {
            warn!("login rejected for {}: bad credentials", email);
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &err.to_string())
        }

        Err(LoginError::PasswordVerificationFailed(msg)) => {
            error!("password verification failed for {}: {}", email, msg);
            ApiResponse::internal_error()
        }

        Err(err @ LoginError::TokenGenerationFailed) => ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "TOKEN_GENERATION_FAILED",
            &err.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::application::use_cases::login_user::{
        ILoginUserUseCase, LoggedInUser, LoginUserResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockLoginUseCase {
        result: Result<LoginUserResponse, LoginError>,
    }

    #[async_trait]
    impl ILoginUserUseCase for MockLoginUseCase {
        async fn execute(
            &self,
            _request: LoginRequest,
        ) -> Result<LoginUserResponse, LoginError> {
            self.result.clone()
        }
    }

    fn app_state(result: Result<LoginUserResponse, LoginError>) -> AppState {
        TestAppStateBuilder::new()
            .with_login_user(Arc::new(MockLoginUseCase { result }))
            .build()
    }

    #[actix_web::test]
    async fn test_login_handler_success() {
        let user_id = Uuid::new_v4();
        let state = app_state(Ok(LoginUserResponse {
            access_token: "token-abc".to_string(),
            user: LoggedInUser {
                id: user_id,
                full_name: "Jane Doe".to_string(),
                email: "a@x.com".to_string(),
                phone: "555-0100".to_string(),
                role_id: Uuid::new_v4(),
            },
        }));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "a@x.com",
                "password": "secret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "token-abc");
        assert_eq!(body["data"]["user"]["id"], user_id.to_string());
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_login_handler_account_not_found() {
        let state = app_state(Err(LoginError::AccountNotFound));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "a@x.com",
                "password": "secret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "account not found or not registered"
        );
    }

    #[actix_web::test]
    async fn test_login_handler_rejects_invalid_email_shape() {
        let state = app_state(Err(LoginError::AccountNotFound));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        // Fails validating deserialization, never reaches the use case.
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "not-an-email",
                "password": "secret"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
