pub mod claims;
pub mod common_data;
pub mod config;
pub mod context;
pub mod definition;
pub mod display;
pub mod error;
pub mod registry;
pub mod sources;

pub use claims::ClaimSet;
pub use config::SourceConfig;
pub use context::AttestationContext;
pub use definition::AttestationDefinition;
pub use error::AttestationError;
pub use registry::{AttestationSourceFactory, AttestationSourceRegistry, BoxedSource};
pub use sources::source::AttestationSource;
