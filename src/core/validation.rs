//! Form validation for Ente and Supervisor creation
//!
//! Each field is checked rule by rule and only the first failing rule is
//! reported. Lengths are counted in characters. The same validators run in
//! the browser before submitting and in the proxy before forwarding.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::models::{CreateEnteRequest, CreateSupervisorRequest};

/// RIF format, e.g. `J-12345678-9`
static RIF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[JGVE]-[0-9]{8,9}-[0-9]$").unwrap_or_else(|e| panic!("invalid RIF pattern: {e}"))
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

pub const INVALID_EMAIL: &str = "Debe ser un email válido";
pub const INVALID_RIF: &str = "Formato de RIF inválido (Ej: J-12345678-9)";
pub const INVALID_ENTE_ID: &str = "Identificador de Ente inválido";
pub const PASSWORD_REQUIRED: &str = "La contraseña es obligatoria";

/// A failed rule on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire (camelCase) field name
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Errors collected for a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Record the outcome of one field check
    fn check(&mut self, field: &str, outcome: Result<(), &str>) {
        if let Err(message) = outcome {
            self.add_error(field, message);
        }
    }

    /// Message for `field`, if it failed
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Convert to Result, returning first error if any
    pub fn to_result(&self) -> Result<(), FieldError> {
        match self.errors.first() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Length bounds and messages for a required text field
struct TextRule<'a> {
    required: &'a str,
    min: usize,
    min_message: &'a str,
    max: usize,
    max_message: &'a str,
}

impl TextRule<'_> {
    fn apply(&self, value: &str) -> Result<(), &str> {
        let len = value.chars().count();
        if len == 0 {
            Err(self.required)
        } else if len < self.min {
            Err(self.min_message)
        } else if len > self.max {
            Err(self.max_message)
        } else {
            Ok(())
        }
    }
}

const fn name_rule(required: &str) -> TextRule<'_> {
    TextRule {
        required,
        min: 2,
        min_message: "El nombre debe tener al menos 2 caracteres",
        max: 100,
        max_message: "El nombre no puede exceder 100 caracteres",
    }
}

const fn surname_rule(required: &str) -> TextRule<'_> {
    TextRule {
        required,
        min: 2,
        min_message: "El apellido debe tener al menos 2 caracteres",
        max: 100,
        max_message: "El apellido no puede exceder 100 caracteres",
    }
}

const fn organization_rule(required: &str) -> TextRule<'_> {
    TextRule {
        required,
        min: 3,
        min_message: "El nombre debe tener al menos 3 caracteres",
        max: 255,
        max_message: "El nombre no puede exceder 255 caracteres",
    }
}

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_rif(value: &str) -> bool {
    RIF_PATTERN.is_match(value)
}

/// Hyphenated UUID, as the backend issues them
pub fn is_valid_ente_id(value: &str) -> bool {
    value.len() == 36 && uuid::Uuid::parse_str(value).is_ok()
}

fn required_email<'a>(value: &str, required: &'a str) -> Result<(), &'a str> {
    if value.is_empty() {
        Err(required)
    } else if !is_valid_email(value) {
        Err(INVALID_EMAIL)
    } else {
        Ok(())
    }
}

fn required_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err(PASSWORD_REQUIRED)
    } else {
        Ok(())
    }
}

/// Validate the Ente creation form. Optional fields accept anything.
pub fn validate_ente(form: &CreateEnteRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.check(
        "nombre",
        organization_rule("El nombre del Ente es obligatorio").apply(&form.nombre),
    );
    result.check(
        "emailContacto",
        required_email(&form.email_contacto, "El email del Admin Ente es obligatorio"),
    );
    result.check("password", required_password(&form.password));
    result.check(
        "nombreAdmin",
        name_rule("El nombre del administrador es obligatorio").apply(&form.nombre_admin),
    );
    result.check(
        "apellidoAdmin",
        surname_rule("El apellido del administrador es obligatorio").apply(&form.apellido_admin),
    );

    result
}

/// Validate the Supervisor creation form, including every selected Ente id
pub fn validate_supervisor(form: &CreateSupervisorRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.check(
        "nombreOrganizacion",
        organization_rule("El nombre de la organización es obligatorio")
            .apply(&form.nombre_organizacion),
    );

    let rif = if form.rif_organizacion.is_empty() {
        Err("El RIF de la organización es obligatorio")
    } else if !is_valid_rif(&form.rif_organizacion) {
        Err(INVALID_RIF)
    } else {
        Ok(())
    };
    result.check("rifOrganizacion", rif);

    result.check(
        "emailOrganizacion",
        required_email(
            &form.email_organizacion,
            "El email de la organización es obligatorio",
        ),
    );
    result.check(
        "nombreUsuario",
        name_rule("El nombre del usuario es obligatorio").apply(&form.nombre_usuario),
    );
    result.check(
        "apellidoUsuario",
        surname_rule("El apellido del usuario es obligatorio").apply(&form.apellido_usuario),
    );
    result.check(
        "emailUsuario",
        required_email(&form.email_usuario, "El email del usuario es obligatorio"),
    );
    result.check("password", required_password(&form.password));

    if form.entes_ids.iter().any(|id| !is_valid_ente_id(id)) {
        result.add_error("entesIds", INVALID_ENTE_ID);
    }

    result
}
