use serde_json::{Map, Value};

use crate::definition::AttestationDefinition;
use crate::error::AttestationError;

pub const CONTRACT_VERSION: &str = "contractVersion";
pub const LEVEL: &str = "level";
pub const ID: &str = "id";
pub const MEMBERSHIP_TYPE: &str = "membershipType";
pub const SINCE: &str = "since";
pub const CREDENTIAL_TYPE: &str = "credentialType";
pub const OUTPUT_CLAIM: &str = "outputClaim";
pub const REQUIRED: &str = "required";

pub const DEFAULT_CONTRACT_VERSION: &str = "1.0.0";
pub const DEFAULT_MEMBERSHIP_TYPE: &str = "FullMember";

pub const DATA_PROCESSOR_TYPE: &str = "dataprocessor";
pub const MEMBERSHIP_TYPE_NAME: &str = "membership";
pub const PRESENTATION_TYPE: &str = "presentation";

pub const DEFINITIONS: &str = r#"[
    {
        "id": "processing-default",
        "attestationType": "dataprocessor",
        "configuration": {}
    },
    {
        "id": "processing-v2",
        "attestationType": "dataprocessor",
        "configuration": { "contractVersion": "2.3.0" }
    },
    {
        "id": "membership",
        "attestationType": "membership",
        "configuration": { "since": "2023-01-01T00:00:00Z" }
    },
    {
        "id": "membership-from-presentation",
        "attestationType": "presentation",
        "configuration": {
            "credentialType": "MembershipCredential",
            "outputClaim": "membership",
            "required": false
        }
    }
]"#;

pub const PRESENTED_MEMBERSHIP: &str = r#"{
    "membershipType": "FullMember",
    "website": "https://example.com/org-a",
    "contact": "dataspace@example.com",
    "since": "2023-01-01T00:00:00Z"
}"#;

pub struct CommonData;

impl CommonData {

    pub fn definitions() -> Result<Vec<AttestationDefinition>, AttestationError> {
        AttestationDefinition::list_from_json(DEFINITIONS)
    }

    pub fn presented_membership() -> Result<Map<String, Value>, AttestationError> {
        match serde_json::from_str::<Map<String, Value>>(PRESENTED_MEMBERSHIP) {
            Ok(claims) => { Ok(claims) }
            Err(err) => { Err(AttestationError::Json(format!("Failed to parse presented membership claims. [{err}]"))) }
        }
    }
}
