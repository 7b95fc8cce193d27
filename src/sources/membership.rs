use serde_json::Value;
use tracing::debug;

use crate::claims::ClaimSet;
use crate::common_data::{DEFAULT_MEMBERSHIP_TYPE, ID, LEVEL, MEMBERSHIP_TYPE, MEMBERSHIP_TYPE_NAME, SINCE};
use crate::config::SourceConfig;
use crate::context::AttestationContext;
use crate::error::AttestationError;
use crate::sources::source::AttestationSource;

const MEMBERSHIP_LEVEL: &str = "membership";

/// Attests dataspace membership. `since` is only emitted when configured.
#[derive(Debug, Clone)]
pub struct MembershipAttestationSource {
    config: SourceConfig,
}

impl MembershipAttestationSource {

    pub fn new(config: SourceConfig) -> Self {
        MembershipAttestationSource { config }
    }
}

impl AttestationSource for MembershipAttestationSource {
    fn source_type(&self) -> &str {
        MEMBERSHIP_TYPE_NAME
    }

    fn execute(&self, context: &AttestationContext) -> Result<ClaimSet, AttestationError> {
        let mut claims = vec![
            (MEMBERSHIP_TYPE, self.config.get_or(MEMBERSHIP_TYPE, DEFAULT_MEMBERSHIP_TYPE)),
            (LEVEL, Value::String(MEMBERSHIP_LEVEL.to_string())),
            (ID, Value::String(context.participant_id().to_string())),
        ];
        if let Some(since) = self.config.get(SINCE) {
            claims.push((SINCE, since.clone()));
        }

        debug!(participant = context.participant_id(), claims = claims.len(), "membership attestation");
        Ok(claims.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_membership() -> Result<(), AttestationError> {
        let source = MembershipAttestationSource::new(SourceConfig::empty());
        let claims = source.execute(&AttestationContext::new("org-A"))?;

        assert_eq!(
            serde_json::to_value(&claims).unwrap(),
            json!({"membershipType": "FullMember", "level": "membership", "id": "org-A"})
        );
        Ok(())
    }

    #[test]
    fn configured_membership() -> Result<(), AttestationError> {
        let config = SourceConfig::from_json(r#"{"membershipType": "Observer", "since": "2023-01-01T00:00:00Z"}"#)?;
        let claims = MembershipAttestationSource::new(config).execute(&AttestationContext::new("org-C"))?;

        assert_eq!(claims.get_str(MEMBERSHIP_TYPE), Some("Observer"));
        assert_eq!(claims.get_str(SINCE), Some("2023-01-01T00:00:00Z"));
        assert_eq!(claims.len(), 4);
        Ok(())
    }
}
