use serde_json::Value;
use tracing::debug;

use crate::claims::ClaimSet;
use crate::common_data::{CONTRACT_VERSION, DATA_PROCESSOR_TYPE, DEFAULT_CONTRACT_VERSION, ID, LEVEL};
use crate::config::SourceConfig;
use crate::context::AttestationContext;
use crate::error::AttestationError;
use crate::sources::source::AttestationSource;

const PROCESSING_LEVEL: &str = "processing";

/// Attests that a participant is a data processor under a given contract
/// version.
#[derive(Debug, Clone)]
pub struct DataProcessorAttestationSource {
    config: SourceConfig,
}

impl DataProcessorAttestationSource {

    pub fn new(config: SourceConfig) -> Self {
        DataProcessorAttestationSource { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl AttestationSource for DataProcessorAttestationSource {
    fn source_type(&self) -> &str {
        DATA_PROCESSOR_TYPE
    }

    fn execute(&self, context: &AttestationContext) -> Result<ClaimSet, AttestationError> {
        let contract_version = self.config.get_or(CONTRACT_VERSION, DEFAULT_CONTRACT_VERSION);
        debug!(participant = context.participant_id(), %contract_version, "data processor attestation");

        Ok(ClaimSet::from_iter([
            (CONTRACT_VERSION, contract_version),
            (LEVEL, Value::String(PROCESSING_LEVEL.to_string())),
            (ID, Value::String(context.participant_id().to_string())),
        ]))
    }
}
