use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::AttestationError;

/// Per-request input to an attestation source.
///
/// Owned by the caller and only borrowed by sources. Besides the participant
/// identifier it can carry the claims of credentials the participant has
/// already presented, keyed by credential type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationContext {
    participant_id: String,
    presented_credentials: BTreeMap<String, Map<String, Value>>,
}

impl AttestationContext {

    pub fn new(participant_id: impl Into<String>) -> Self {
        AttestationContext {
            participant_id: participant_id.into(),
            presented_credentials: BTreeMap::new(),
        }
    }

    /// Adds the claims of a presented credential. A later credential of the
    /// same type replaces the earlier one.
    pub fn with_credential(mut self, credential_type: impl Into<String>, claims: Map<String, Value>) -> Self {
        self.presented_credentials.insert(credential_type.into(), claims);
        self
    }

    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    pub fn resolve_claims(&self, credential_type: &str) -> Option<&Map<String, Value>> {
        self.presented_credentials.get(credential_type)
    }

    pub fn credential_types(&self) -> impl Iterator<Item = &str> {
        self.presented_credentials.keys().map(String::as_str)
    }

    /// Checks the hosting contract: the participant identifier must not be
    /// blank. Sources do not call this themselves.
    pub fn validate(&self) -> Result<(), AttestationError> {
        if self.participant_id.trim().is_empty() {
            return Err(AttestationError::InvalidContext("participant id is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_presented_claims_by_type() {
        let mut claims = Map::new();
        claims.insert("membershipType".to_string(), json!("FullMember"));
        let context = AttestationContext::new("org-A").with_credential("MembershipCredential", claims.clone());

        assert_eq!(context.participant_id(), "org-A");
        assert_eq!(context.resolve_claims("MembershipCredential"), Some(&claims));
        assert_eq!(context.resolve_claims("DataProcessorCredential"), None);
        assert_eq!(context.credential_types().collect::<Vec<_>>(), vec!["MembershipCredential"]);
    }

    #[test]
    fn blank_participant_fails_validation() {
        assert!(AttestationContext::new("participant-42").validate().is_ok());
        assert_eq!(
            AttestationContext::new("  ").validate(),
            Err(AttestationError::InvalidContext("participant id is empty".to_string()))
        );
    }
}
