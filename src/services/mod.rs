//! Business logic: user authentication and registration rules.

pub mod password;
pub mod user;

pub use user::UserService;
