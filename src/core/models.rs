//! Wire types for the Ente and Supervisor endpoints

use serde::{Deserialize, Serialize};

/// `None` for blank input
pub fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Body of `POST /entes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnteRequest {
    pub nombre: String,
    pub email_contacto: String,
    pub password: String,
    pub nombre_admin: String,
    pub apellido_admin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siglas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion_fiscal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parroquia: Option<String>,
}

impl CreateEnteRequest {
    /// Drop blank optional fields so they are omitted on the wire
    pub fn normalized(self) -> Self {
        Self {
            rif: self.rif.and_then(non_blank),
            siglas: self.siglas.and_then(non_blank),
            direccion_fiscal: self.direccion_fiscal.and_then(non_blank),
            estado: self.estado.and_then(non_blank),
            municipio: self.municipio.and_then(non_blank),
            parroquia: self.parroquia.and_then(non_blank),
            ..self
        }
    }
}

/// Body of `POST /supervisores`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupervisorRequest {
    pub nombre_organizacion: String,
    pub rif_organizacion: String,
    pub email_organizacion: String,
    pub nombre_usuario: String,
    pub apellido_usuario: String,
    pub email_usuario: String,
    pub password: String,
    #[serde(default)]
    pub entes_ids: Vec<String>,
}

/// An Ente with no supervising organization yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnteSinSupervisor {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub rif: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
}

/// Success body of both creation endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub message: String,
}
