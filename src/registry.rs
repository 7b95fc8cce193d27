//! Lookup of attestation source factories by type name.
//!
//! Sources are selected once, when definitions are loaded. The registry plays
//! no part in `execute`.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::common_data::{DATA_PROCESSOR_TYPE, MEMBERSHIP_TYPE_NAME, PRESENTATION_TYPE};
use crate::config::SourceConfig;
use crate::definition::AttestationDefinition;
use crate::error::AttestationError;
use crate::sources::data_processor::DataProcessorAttestationSource;
use crate::sources::membership::MembershipAttestationSource;
use crate::sources::presentation::PresentationAttestationSource;
use crate::sources::source::AttestationSource;

pub type BoxedSource = Box<dyn AttestationSource>;

/// Builds a source from its configuration.
pub trait AttestationSourceFactory: Send + Sync {
    fn create(&self, config: &SourceConfig) -> Result<BoxedSource, AttestationError>;
}

impl<F> AttestationSourceFactory for F
where
    F: Fn(&SourceConfig) -> Result<BoxedSource, AttestationError> + Send + Sync,
{
    fn create(&self, config: &SourceConfig) -> Result<BoxedSource, AttestationError> {
        self(config)
    }
}

fn data_processor(config: &SourceConfig) -> Result<BoxedSource, AttestationError> {
    Ok(Box::new(DataProcessorAttestationSource::new(config.clone())))
}

fn membership(config: &SourceConfig) -> Result<BoxedSource, AttestationError> {
    Ok(Box::new(MembershipAttestationSource::new(config.clone())))
}

fn presentation(config: &SourceConfig) -> Result<BoxedSource, AttestationError> {
    Ok(Box::new(PresentationAttestationSource::new(config)?))
}

#[derive(Default)]
pub struct AttestationSourceRegistry {
    factories: HashMap<String, Box<dyn AttestationSourceFactory>>,
}

impl AttestationSourceRegistry {

    pub fn new() -> Self {
        AttestationSourceRegistry::default()
    }

    /// A registry holding the built-in `dataprocessor`, `membership` and
    /// `presentation` sources.
    pub fn with_defaults() -> Self {
        let mut factories: HashMap<String, Box<dyn AttestationSourceFactory>> = HashMap::new();
        factories.insert(DATA_PROCESSOR_TYPE.to_string(), Box::new(data_processor));
        factories.insert(MEMBERSHIP_TYPE_NAME.to_string(), Box::new(membership));
        factories.insert(PRESENTATION_TYPE.to_string(), Box::new(presentation));

        AttestationSourceRegistry { factories }
    }

    pub fn register(&mut self, source_type: &str, factory: impl AttestationSourceFactory + 'static) -> Result<(), AttestationError> {
        if self.factories.contains_key(source_type) {
            return Err(AttestationError::DuplicateSourceType(source_type.to_string()));
        }
        self.factories.insert(source_type.to_string(), Box::new(factory));
        debug!(source_type, "registered attestation source factory");
        Ok(())
    }

    pub fn contains(&self, source_type: &str) -> bool {
        self.factories.contains_key(source_type)
    }

    pub fn source_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn create(&self, source_type: &str, config: &SourceConfig) -> Result<BoxedSource, AttestationError> {
        match self.factories.get(source_type) {
            Some(factory) => { factory.create(config) }
            None => { Err(AttestationError::UnknownSourceType(source_type.to_string())) }
        }
    }

    pub fn resolve(&self, definition: &AttestationDefinition) -> Result<BoxedSource, AttestationError> {
        let source = self.create(&definition.attestation_type, &definition.configuration)?;
        info!(definition = %definition.id, source_type = %definition.attestation_type, "resolved attestation source");
        Ok(source)
    }

    /// Resolves every definition, stopping at the first one that fails.
    pub fn resolve_all(&self, definitions: &[AttestationDefinition]) -> Result<Vec<(String, BoxedSource)>, AttestationError> {
        definitions
            .iter()
            .map(|definition| self.resolve(definition).map(|source| (definition.id.clone(), source)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use serde_json::json;

    use crate::claims::ClaimSet;
    use crate::common_data::{CommonData, CONTRACT_VERSION, ID, LEVEL};
    use crate::context::AttestationContext;

    use super::*;

    struct FixedLevelSource(&'static str);

    impl AttestationSource for FixedLevelSource {
        fn source_type(&self) -> &str {
            "fixed"
        }

        fn execute(&self, context: &AttestationContext) -> Result<ClaimSet, AttestationError> {
            Ok(ClaimSet::from_iter([(LEVEL, json!(self.0)), (ID, json!(context.participant_id()))]))
        }
    }

    #[test]
    fn defaults_are_registered() {
        let registry = AttestationSourceRegistry::with_defaults();

        assert_eq!(registry.source_types(), vec!["dataprocessor", "membership", "presentation"]);
    }

    #[test]
    fn resolves_data_processor_definition() -> Result<(), AttestationError> {
        let registry = AttestationSourceRegistry::with_defaults();
        let definition = AttestationDefinition::new(
            "dp",
            DATA_PROCESSOR_TYPE,
            SourceConfig::from_json(r#"{"contractVersion": "2.3.0"}"#)?,
        );

        let source = registry.resolve(&definition)?;
        let claims = source.execute(&AttestationContext::new("org-A"))?;

        assert_eq!(source.source_type(), DATA_PROCESSOR_TYPE);
        assert_eq!(claims.get_str(CONTRACT_VERSION), Some("2.3.0"));
        assert_eq!(claims.get_str(LEVEL), Some("processing"));
        Ok(())
    }

    #[test]
    fn unknown_type() {
        let registry = AttestationSourceRegistry::new();

        assert!(matches!(
            registry.create("dataprocessor", &SourceConfig::empty()),
            Err(AttestationError::UnknownSourceType(source_type)) if source_type == "dataprocessor"
        ));
    }

    #[test]
    fn custom_factory_and_duplicates() -> Result<(), AttestationError> {
        let mut registry = AttestationSourceRegistry::with_defaults();
        registry.register("sensitive", |_: &SourceConfig| -> Result<BoxedSource, AttestationError> {
            Ok(Box::new(FixedLevelSource("sensitive")))
        })?;

        let claims = registry.create("sensitive", &SourceConfig::empty())?.execute(&AttestationContext::new("org-A"))?;
        assert_eq!(claims.get_str(LEVEL), Some("sensitive"));

        let duplicate = registry.register(DATA_PROCESSOR_TYPE, |_: &SourceConfig| -> Result<BoxedSource, AttestationError> {
            Ok(Box::new(FixedLevelSource("other")))
        });
        assert_eq!(duplicate, Err(AttestationError::DuplicateSourceType(DATA_PROCESSOR_TYPE.to_string())));
        Ok(())
    }

    #[test]
    fn invalid_configuration_fails_at_resolution() {
        let registry = AttestationSourceRegistry::with_defaults();
        let definition = AttestationDefinition::new("presentation", PRESENTATION_TYPE, SourceConfig::empty());

        assert!(matches!(registry.resolve(&definition), Err(AttestationError::Configuration { .. })));
    }

    #[test]
    fn resolves_bundled_definitions() -> Result<(), AttestationError> {
        let registry = AttestationSourceRegistry::with_defaults();
        let resolved = registry.resolve_all(&CommonData::definitions()?)?;

        let ids: Vec<&str> = resolved.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["processing-default", "processing-v2", "membership", "membership-from-presentation"]);
        Ok(())
    }

    #[test]
    fn shared_source_across_threads() -> Result<(), AttestationError> {
        let registry = AttestationSourceRegistry::with_defaults();
        let source: Arc<dyn AttestationSource> = Arc::from(registry.create(DATA_PROCESSOR_TYPE, &SourceConfig::empty())?);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let source = Arc::clone(&source);
                thread::spawn(move || source.execute(&AttestationContext::new(format!("participant-{i}"))))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let claims = handle.join().expect("worker panicked")?;
            assert_eq!(claims.get_str(ID), Some(format!("participant-{i}").as_str()));
        }
        Ok(())
    }
}
