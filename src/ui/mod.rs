pub mod auth;
pub mod common;
pub mod forms;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod services;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use icon::{Icon, icons};
pub use notifications::{NotificationsContainer, provide_notifications, use_notifications};
