//! Application pages
//!
//! - Root redirect
//! - Login page
//! - Dashboard home
//! - Ente and Supervisor creation
//! - Placeholder modules (Contrataciones, Usuarios, Configuración)
//! - Not found

mod dashboard;
mod ente;
mod home;
mod login;
mod not_found;
mod placeholder;
mod supervisor;

pub use dashboard::DashboardPage;
pub use ente::EntePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use placeholder::{ConfiguracionPage, ContratacionesPage, UsuariosPage};
pub use supervisor::SupervisorPage;
