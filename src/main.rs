use tracing_subscriber::EnvFilter;
use issuer_attestations::common_data::CommonData;
use issuer_attestations::display::Display;
use issuer_attestations::display::Display::DisplayJson;
use issuer_attestations::{AttestationContext, AttestationError, AttestationSourceRegistry};

const PARTICIPANTS: [&str; 2] = ["participant-42", "org-A"];
const PRESENTED_CREDENTIAL_TYPE: &str = "MembershipCredential";

fn setup_contexts() -> Result<Vec<AttestationContext>, AttestationError> {
    let presented = CommonData::presented_membership()?;

    Ok(PARTICIPANTS
        .iter()
        .enumerate()
        .map(|(index, participant)| {
            let context = AttestationContext::new(*participant);
            // Only the second participant presents a membership credential
            if index == 1 { context.with_credential(PRESENTED_CREDENTIAL_TYPE, presented.clone()) } else { context }
        })
        .collect())
}

fn run(consumer: Display) -> Result<(), AttestationError> {
    let registry = AttestationSourceRegistry::with_defaults();
    let sources = registry.resolve_all(&CommonData::definitions()?)?;
    let contexts = setup_contexts()?;

    for context in &contexts {
        context.validate()?;
    }

    consumer.display(&sources, &contexts)
}

pub fn main() -> Result<(), AttestationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run(DisplayJson)?;
    run(Display::DisplayTable)?;

    Ok(())
}
