//! Reporter that shows warnings on the terminal as well as in the log.

use rlc_core::report::{Reporter, TracingReporter, ValidationEvent};

pub struct ConsoleReporter;

impl ConsoleReporter {
    fn describe(event: &ValidationEvent) -> Option<String> {
        let line = match event {
            ValidationEvent::UnsupportedAlgorithm { name } => {
                format!("skipping unsupported algorithm {name}")
            }
            ValidationEvent::LocalChecksumUnreadable {
                sidecar, error, ..
            } => format!("unreadable checksum file {}: {error}", sidecar.display()),
            ValidationEvent::RemoteChecksumFailed {
                artifact,
                algorithm,
                error,
            } => format!(
                "no remote {algorithm} checksum for {}: {error}",
                artifact.display()
            ),
            ValidationEvent::ArtifactUnreadable { artifact, error } => {
                format!("cannot read {}: {error}", artifact.display())
            }
            ValidationEvent::ChecksumMismatch {
                artifact,
                algorithm,
                expected,
                actual,
            } => format!(
                "{} {algorithm} mismatch: expected {expected}, was {actual}",
                artifact.display()
            ),
            ValidationEvent::RemoteChecksumLookup { .. } => return None,
        };
        Some(line)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: ValidationEvent) {
        if let Some(line) = Self::describe(&event) {
            eprintln!("warning: {line}");
        }
        TracingReporter.report(event);
    }
}
