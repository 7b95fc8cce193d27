use crate::claims::ClaimSet;
use crate::context::AttestationContext;
use crate::error::AttestationError;

/// A pluggable producer of claims about a participant.
///
/// Implementations are built once from their configuration and then invoked
/// for every attestation request. `execute` must not mutate shared state, so a
/// single instance can serve concurrent callers.
pub trait AttestationSource: Send + Sync {

    /// Registry type name this source was built from.
    fn source_type(&self) -> &str;

    fn execute(&self, context: &AttestationContext) -> Result<ClaimSet, AttestationError>;
}
