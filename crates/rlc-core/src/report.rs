//! Reporting of validation events.
//!
//! The engine never logs through a global logger directly. Components take a
//! `&dyn Reporter`; production code passes `TracingReporter`, tests pass a
//! `RecordingReporter` and inspect what was reported.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

use crate::algorithm::Algorithm;

/// Target used for all validation log records.
pub const LOG_TARGET: &str = "robust_local_cache";

/// Something noteworthy that happened while resolving or checking a checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationEvent {
    /// Configured algorithm name the hashing backend does not support.
    UnsupportedAlgorithm { name: String },
    /// Local sidecar exists but could not be read or parsed.
    LocalChecksumUnreadable {
        sidecar: PathBuf,
        algorithm: Algorithm,
        error: String,
    },
    /// No local sidecar; asking the provider for a remote checksum.
    RemoteChecksumLookup {
        artifact: PathBuf,
        algorithm: Algorithm,
    },
    /// Provider failed to deliver a checksum.
    RemoteChecksumFailed {
        artifact: PathBuf,
        algorithm: Algorithm,
        error: String,
    },
    /// Artifact could not be read while digesting.
    ArtifactUnreadable { artifact: PathBuf, error: String },
    /// Computed digest differs from the expected checksum.
    ChecksumMismatch {
        artifact: PathBuf,
        algorithm: Algorithm,
        expected: String,
        actual: String,
    },
}

impl ValidationEvent {
    pub fn level(&self) -> Level {
        match self {
            ValidationEvent::RemoteChecksumLookup { .. } => Level::INFO,
            _ => Level::WARN,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.level() == Level::WARN
    }
}

/// Sink for validation events.
pub trait Reporter {
    fn report(&self, event: ValidationEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: ValidationEvent) {
        match event {
            ValidationEvent::UnsupportedAlgorithm { name } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    algorithm = %name,
                    "can't find checksum algorithm, skipping it for local artifact validation"
                );
            }
            ValidationEvent::LocalChecksumUnreadable {
                sidecar,
                algorithm,
                error,
            } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    sidecar = %sidecar.display(),
                    %algorithm,
                    %error,
                    "failed to read local checksum file"
                );
            }
            ValidationEvent::RemoteChecksumLookup {
                artifact,
                algorithm,
            } => {
                tracing::info!(
                    target: LOG_TARGET,
                    artifact = %artifact.display(),
                    %algorithm,
                    "downloading remote checksum file"
                );
            }
            ValidationEvent::RemoteChecksumFailed {
                artifact,
                algorithm,
                error,
            } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    artifact = %artifact.display(),
                    %algorithm,
                    %error,
                    "failed to download checksum file"
                );
            }
            ValidationEvent::ArtifactUnreadable { artifact, error } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    artifact = %artifact.display(),
                    %error,
                    "failed to read artifact for checksum validation"
                );
            }
            ValidationEvent::ChecksumMismatch {
                artifact,
                algorithm,
                expected,
                actual,
            } => {
                tracing::warn!(
                    target: LOG_TARGET,
                    "local artifact '{}' {} checksum mismatch, expected '{}', was '{}'",
                    artifact.display(),
                    algorithm,
                    expected,
                    actual
                );
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ValidationEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of events reported so far, in order.
    pub fn events(&self) -> Vec<ValidationEvent> {
        self.events
            .lock()
            .map(|v| v.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn warnings(&self) -> Vec<ValidationEvent> {
        self.events().into_iter().filter(|e| e.is_warning()).collect()
    }

    pub fn mismatches(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ValidationEvent::ChecksumMismatch { .. }))
            .count()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: ValidationEvent) {
        match self.events.lock() {
            Ok(mut v) => v.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: ValidationEvent) {
        (**self).report(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_info_everything_else_warns() {
        let lookup = ValidationEvent::RemoteChecksumLookup {
            artifact: PathBuf::from("a.jar"),
            algorithm: Algorithm::Sha1,
        };
        assert_eq!(lookup.level(), Level::INFO);
        assert!(!lookup.is_warning());

        let mismatch = ValidationEvent::ChecksumMismatch {
            artifact: PathBuf::from("a.jar"),
            algorithm: Algorithm::Md5,
            expected: "00".to_string(),
            actual: "ff".to_string(),
        };
        assert!(mismatch.is_warning());
    }

    #[test]
    fn recording_reporter_keeps_order() {
        let r = RecordingReporter::new();
        r.report(ValidationEvent::UnsupportedAlgorithm {
            name: "SHA-512".to_string(),
        });
        r.report(ValidationEvent::RemoteChecksumLookup {
            artifact: PathBuf::from("a.jar"),
            algorithm: Algorithm::Md5,
        });
        let events = r.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ValidationEvent::UnsupportedAlgorithm { .. }));
        assert_eq!(r.warnings().len(), 1);
        assert_eq!(r.mismatches(), 0);
    }

    #[test]
    fn tracing_reporter_does_not_panic_without_subscriber() {
        TracingReporter.report(ValidationEvent::ArtifactUnreadable {
            artifact: PathBuf::from("a.jar"),
            error: "gone".to_string(),
        });
    }
}
