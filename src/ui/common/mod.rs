//! Common reusable UI components

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, FormSection, SelectField};
pub use message::{EmptyMessage, ErrorMessage};
pub use spinner::{Spinner, SpinnerSize, SubmitButton};
