pub mod modules;
pub mod api;
pub mod health;
pub mod shared;

use crate::modules::user::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::user::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::modules::user::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::modules::user::application::ports::outgoing::{
    password_hasher::PasswordHasher, token_issuer::AccessTokenIssuer,
};
use crate::modules::user::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    force_delete_user::{ForceDeleteUserUseCase, IForceDeleteUserUseCase},
    get_user::{GetUserUseCase, IGetUserUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    restore_user::{IRestoreUserUseCase, RestoreUserUseCase},
    soft_delete_user::{ISoftDeleteUserUseCase, SoftDeleteUserUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub get_user_use_case: Arc<dyn IGetUserUseCase + Send + Sync>,
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub soft_delete_user_use_case: Arc<dyn ISoftDeleteUserUseCase + Send + Sync>,
    pub restore_user_use_case: Arc<dyn IRestoreUserUseCase + Send + Sync>,
    pub force_delete_user_use_case: Arc<dyn IForceDeleteUserUseCase + Send + Sync>,
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher = Argon2Hasher::from_env();

    let hasher_arc: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(argon2_password_hasher);
    let token_issuer_arc: Arc<dyn AccessTokenIssuer + Send + Sync> = Arc::new(jwt_service);

    // Use cases
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let get_user_use_case = GetUserUseCase::new(user_query.clone());
    let create_user_use_case =
        CreateUserUseCase::new(user_repo.clone(), Arc::clone(&hasher_arc));
    let update_user_use_case = UpdateUserUseCase::new(user_repo.clone());
    let soft_delete_user_use_case = SoftDeleteUserUseCase::new(user_repo.clone());
    let restore_user_use_case = RestoreUserUseCase::new(user_repo.clone());
    let force_delete_user_use_case = ForceDeleteUserUseCase::new(user_repo.clone());
    let register_user_use_case =
        RegisterUserUseCase::new(user_repo, Arc::clone(&hasher_arc));
    let login_user_use_case =
        LoginUserUseCase::new(user_query, hasher_arc, token_issuer_arc);

    let state = AppState {
        list_users_use_case: Arc::new(list_users_use_case),
        get_user_use_case: Arc::new(get_user_use_case),
        create_user_use_case: Arc::new(create_user_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        soft_delete_user_use_case: Arc::new(soft_delete_user_use_case),
        restore_user_use_case: Arc::new(restore_user_use_case),
        force_delete_user_use_case: Arc::new(force_delete_user_use_case),
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::user::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(routes::register_user_handler);
    cfg.service(routes::login_user_handler);
    // Users
    cfg.service(routes::list_users_handler);
    cfg.service(routes::create_user_handler);
    cfg.service(routes::get_user_handler);
    cfg.service(routes::update_user_handler);
    cfg.service(routes::restore_user_handler);
    cfg.service(routes::force_delete_user_handler);
    cfg.service(routes::soft_delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
