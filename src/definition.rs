use serde::{Deserialize, Serialize};

use crate::config::SourceConfig;
use crate::error::AttestationError;

/// A configured attestation: which source type to build and with what
/// options. Produced by an external configuration loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationDefinition {
    pub id: String,
    pub attestation_type: String,
    #[serde(default)]
    pub configuration: SourceConfig,
}

impl AttestationDefinition {

    pub fn new(id: impl Into<String>, attestation_type: impl Into<String>, configuration: SourceConfig) -> Self {
        AttestationDefinition {
            id: id.into(),
            attestation_type: attestation_type.into(),
            configuration,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AttestationError> {
        match serde_json::from_str::<AttestationDefinition>(json) {
            Ok(definition) => { Ok(definition) }
            Err(err) => { Err(AttestationError::Json(format!("Failed to parse attestation definition. [{err}]"))) }
        }
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, AttestationError> {
        match serde_json::from_str::<Vec<AttestationDefinition>>(json) {
            Ok(definitions) => { Ok(definitions) }
            Err(err) => { Err(AttestationError::Json(format!("Failed to parse attestation definitions. [{err}]"))) }
        }
    }
}
