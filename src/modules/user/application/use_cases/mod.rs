pub mod create_user;
pub mod force_delete_user;
pub mod get_user;
pub mod list_users;
pub mod login_user;
pub mod register_user;
pub mod restore_user;
pub mod soft_delete_user;
pub mod update_user;

#[cfg(test)]
mod delete_test_support;
