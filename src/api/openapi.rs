use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::user::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RegisterRequestDto, RegisterUserResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts Backend API",
        version = "1.0.0",
        description = "API documentation for the user accounts service",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::modules::user::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::modules::user::adapter::incoming::web::routes::login_user::login_user_handler,

        // User management endpoints
        // list_users_handler,
        // get_user_handler,
        // create_user_handler,
        // update_user_handler,
        // restore_user_handler,
        // soft_delete_user_handler,
        // force_delete_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisterUserResponse,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
