//! Authentication UI module
//!
//! Auth context over the core auth store, cookie storage for the browser,
//! the login form and the header user menu.

mod context;
mod login_form;
mod storage;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use user_menu::UserMenu;
