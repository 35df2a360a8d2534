//! Core domain: sessions, routing policy, forms and the backend proxy

#[cfg(feature = "ssr")]
pub mod api;
pub mod auth;
#[cfg(feature = "ssr")]
pub mod backend;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod guard;
pub mod models;
pub mod routes;
pub mod selection;
pub mod services;
#[cfg(all(test, feature = "ssr"))]
mod tests;
pub mod validation;

pub use models::{CreateEnteRequest, CreateResponse, CreateSupervisorRequest, EnteSinSupervisor};
pub use selection::EnteSelection;
pub use services::{ApiErrorBody, ApiFailure, Operation, ServiceError};
