//! Expected-checksum resolution: which algorithm, and from which source.
//!
//! Algorithms are tried in order. For each one the local sidecar wins if it
//! exists; only when there is no sidecar file is the provider asked. The first
//! algorithm that yields a checksum is used and the rest are never consulted.

use std::path::Path;

use crate::algorithm::{default_algorithm_names, Algorithm};
use crate::provider::ChecksumProvider;
use crate::report::{Reporter, ValidationEvent};
use crate::sidecar::{read_sidecar, sidecar_path};
use crate::validator::{ChecksumSource, DigestValidator, ExpectedChecksum, Validator};

/// Builds validators for artifacts according to an algorithm preference list.
#[derive(Debug, Clone)]
pub struct Resolver {
    algorithms: Vec<String>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(default_algorithm_names())
    }
}

impl Resolver {
    /// Names are parsed lazily so unsupported entries are reported per lookup.
    pub fn new(algorithms: Vec<String>) -> Self {
        Self { algorithms }
    }

    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Resolve the expected checksum for `artifact` and bind a validator to it.
    ///
    /// Returns `Validator::NoOp` if no algorithm produced a checksum.
    pub fn resolve(
        &self,
        artifact: &Path,
        provider: &dyn ChecksumProvider,
        reporter: &dyn Reporter,
    ) -> Validator {
        match self.resolve_expected(artifact, provider, reporter) {
            Some(expected) => Validator::Digest(DigestValidator::new(artifact, expected)),
            None => Validator::NoOp,
        }
    }

    /// Find the first expected checksum in preference order.
    pub fn resolve_expected(
        &self,
        artifact: &Path,
        provider: &dyn ChecksumProvider,
        reporter: &dyn Reporter,
    ) -> Option<ExpectedChecksum> {
        for name in &self.algorithms {
            let algorithm = match Algorithm::from_name(name) {
                Ok(a) => a,
                Err(e) => {
                    reporter.report(ValidationEvent::UnsupportedAlgorithm { name: e.name });
                    continue;
                }
            };

            let sidecar = sidecar_path(artifact, algorithm);
            if sidecar.is_file() {
                match read_sidecar(&sidecar) {
                    Ok(value) => {
                        return Some(ExpectedChecksum {
                            algorithm,
                            value,
                            source: ChecksumSource::Sidecar(sidecar),
                        });
                    }
                    Err(e) => {
                        // Next algorithm, not the remote copy of this one.
                        reporter.report(ValidationEvent::LocalChecksumUnreadable {
                            sidecar,
                            algorithm,
                            error: e.to_string(),
                        });
                        continue;
                    }
                }
            }

            if !provider.is_remote() {
                continue;
            }
            if let Some(expected) = self.remote_expected(artifact, algorithm, provider, reporter) {
                return Some(expected);
            }
        }
        None
    }

    fn remote_expected(
        &self,
        artifact: &Path,
        algorithm: Algorithm,
        provider: &dyn ChecksumProvider,
        reporter: &dyn Reporter,
    ) -> Option<ExpectedChecksum> {
        reporter.report(ValidationEvent::RemoteChecksumLookup {
            artifact: artifact.to_path_buf(),
            algorithm,
        });
        match provider.get_checksum(algorithm) {
            Ok(Some(value)) => {
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                Some(ExpectedChecksum {
                    algorithm,
                    value: value.to_string(),
                    source: ChecksumSource::Remote,
                })
            }
            Ok(None) => None,
            Err(e) => {
                reporter.report(ValidationEvent::RemoteChecksumFailed {
                    artifact: artifact.to_path_buf(),
                    algorithm,
                    error: e.to_string(),
                });
                None
            }
        }
    }
}
