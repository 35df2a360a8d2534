//! Authentication: sessions, cookies, route policy and the client store
//!
//! - Token payload decoding and session verification (server)
//! - One authorization policy for every guard (server)
//! - Cookie contract and auth storage (shared)
//! - Client auth store with injectable backend and storage (shared)

pub mod cookies;
#[cfg(feature = "ssr")]
pub mod policy;
#[cfg(feature = "ssr")]
pub mod session;
pub mod storage;
pub mod store;
pub mod user;

#[cfg(feature = "ssr")]
pub use policy::{AccessDecision, DenyReason, authorize, authorize_session};
#[cfg(feature = "ssr")]
pub use session::{Session, SessionError, verify_session};
pub use storage::{AuthStorage, MemoryStorage};
pub use store::{AuthBackend, AuthState, AuthStore, LoginError};
pub use user::{ALLOWED_ROLE, LoginCredentials, LoginResponse, User};
