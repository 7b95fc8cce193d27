use serde_json::Value;
use tracing::{debug, warn};

use crate::claims::ClaimSet;
use crate::common_data::{CREDENTIAL_TYPE, ID, OUTPUT_CLAIM, PRESENTATION_TYPE, REQUIRED};
use crate::config::SourceConfig;
use crate::context::AttestationContext;
use crate::error::AttestationError;
use crate::sources::source::AttestationSource;

/// Re-issues claims the participant already proved with a presented
/// credential.
///
/// The claims object of the credential named by `credentialType` is emitted
/// under `outputClaim`. When the credential is missing the source fails,
/// unless `required` is `false`, in which case only `id` is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationAttestationSource {
    credential_type: String,
    output_claim: String,
    required: bool,
}

impl PresentationAttestationSource {

    pub fn new(config: &SourceConfig) -> Result<Self, AttestationError> {
        let credential_type = config.require_str(CREDENTIAL_TYPE)?.to_string();
        let output_claim = config.require_str(OUTPUT_CLAIM)?.to_string();
        let required = config.get_bool_or(REQUIRED, true)?;

        if output_claim == ID {
            return Err(AttestationError::configuration(OUTPUT_CLAIM, format!("'{ID}' is reserved for the participant id")));
        }

        Ok(PresentationAttestationSource {
            credential_type,
            output_claim,
            required,
        })
    }
}

impl AttestationSource for PresentationAttestationSource {
    fn source_type(&self) -> &str {
        PRESENTATION_TYPE
    }

    fn execute(&self, context: &AttestationContext) -> Result<ClaimSet, AttestationError> {
        let id = (ID.to_string(), Value::String(context.participant_id().to_string()));

        match context.resolve_claims(&self.credential_type) {
            Some(presented) => {
                debug!(participant = context.participant_id(), credential_type = %self.credential_type, "presented credential found");
                Ok(ClaimSet::from_iter([
                    (self.output_claim.clone(), Value::Object(presented.clone())),
                    id,
                ]))
            }
            None if self.required => {
                warn!(participant = context.participant_id(), credential_type = %self.credential_type, "required credential not presented");
                Err(AttestationError::MissingCredential(self.credential_type.clone()))
            }
            None => {
                debug!(participant = context.participant_id(), credential_type = %self.credential_type, "optional credential not presented");
                Ok(ClaimSet::from_iter([id]))
            }
        }
    }
}
