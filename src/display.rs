use serde_json::Value;

use crate::claims::ClaimSet;
use crate::context::AttestationContext;
use crate::error::AttestationError;
use crate::registry::BoxedSource;

pub enum Display {
    DisplayJson,
    DisplayTable,
}

impl Display {
    pub fn display(&self, sources: &[(String, BoxedSource)], contexts: &[AttestationContext]) -> Result<(), AttestationError> {
        match self {
            Display::DisplayJson => { DisplayJson::display(sources, contexts) }
            Display::DisplayTable => { DisplayTable::display(sources, contexts) }
        }
    }
}

pub trait DisplayData {
    fn display(sources: &[(String, BoxedSource)], contexts: &[AttestationContext]) -> Result<(), AttestationError>;
}

/// Failed attestations are reported inline; they do not abort the listing.
fn attest(source: &BoxedSource, context: &AttestationContext) -> Result<ClaimSet, String> {
    source.execute(context).map_err(|err| err.to_string())
}

struct DisplayJson {}
impl DisplayData for DisplayJson {
    fn display(sources: &[(String, BoxedSource)], contexts: &[AttestationContext]) -> Result<(), AttestationError> {
        for context in contexts {
            for (id, source) in sources {
                match attest(source, context) {
                    Ok(claims) => {
                        let json = match serde_json::to_string_pretty(&claims) {
                            Ok(json) => { json }
                            Err(err) => { return Err(AttestationError::Json(format!("Failed to render claims of {id}. [{err}]"))) }
                        };
                        println!("{:30} {:16} = {}\n", id, context.participant_id(), json);
                    }
                    Err(err) => { println!("{:30} {:16} ! {}\n", id, context.participant_id(), err); }
                }
            }
        }

        Ok(())
    }
}

struct DisplayTable {}
impl DisplayData for DisplayTable {
    fn display(sources: &[(String, BoxedSource)], contexts: &[AttestationContext]) -> Result<(), AttestationError> {
        for context in contexts {
            println!();
            println!("╔══════════════════════════════════════════════════════════╗");
            println!("║ {:^56} ║", context.participant_id());
            println!("╠════════════════════════════╦═════════════════════════════╣");

            for (id, source) in sources {
                println!("║ {:26} ║ {:27} ║", id, source.source_type());
                match attest(source, context) {
                    Ok(claims) => {
                        for (key, value) in claims.iter() {
                            let rendered = match value {
                                Value::String(text) => { text.clone() }
                                other => { other.to_string() }
                            };
                            println!("║   - {:22} ║ {:27.27} ║", key, rendered);
                        }
                    }
                    Err(err) => { println!("║   ! {:22} ║ {:27.27} ║", "error", err); }
                }
            }

            println!("╚════════════════════════════╩═════════════════════════════╝");
        }

        Ok(())
    }
}
