pub mod auth_handler;
pub mod user_handler;

pub use auth_handler::{__path_login, login};
pub use user_handler::{__path_admins, __path_users, admins, users};
