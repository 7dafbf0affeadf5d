mod create_user;
mod force_delete_user;
mod get_user;
mod list_users;
pub mod login_user;
pub mod register_user;
mod restore_user;
mod soft_delete_user;
mod update_user;

pub use create_user::create_user_handler;
pub use force_delete_user::force_delete_user_handler;
pub use get_user::get_user_handler;
pub use list_users::list_users_handler;
pub use login_user::login_user_handler;
pub use register_user::register_user_handler;
pub use restore_user::restore_user_handler;
pub use soft_delete_user::soft_delete_user_handler;
pub use update_user::update_user_handler;

pub use login_user::{LoginRequestDto, LoginResponse, LoginUserInfo};
pub use register_user::{RegisterRequestDto, RegisterUserResponse};
