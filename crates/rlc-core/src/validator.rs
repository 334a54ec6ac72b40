//! Artifact validation against one resolved checksum.

use std::path::{Path, PathBuf};

use crate::algorithm::Algorithm;
use crate::digest::{digest_file, Hasher};
use crate::report::{Reporter, ValidationEvent};

/// Where an expected checksum came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumSource {
    /// Sidecar file next to the artifact.
    Sidecar(PathBuf),
    /// Value handed over by the checksum provider.
    Remote,
}

/// Checksum the artifact must hash to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedChecksum {
    pub algorithm: Algorithm,
    pub value: String,
    pub source: ChecksumSource,
}

/// Validator bound to one artifact, one algorithm and one expected value.
#[derive(Debug)]
pub struct DigestValidator {
    artifact: PathBuf,
    hasher: Hasher,
    expected: ExpectedChecksum,
}

impl DigestValidator {
    pub fn new(artifact: impl Into<PathBuf>, expected: ExpectedChecksum) -> Self {
        Self {
            artifact: artifact.into(),
            hasher: Hasher::new(expected.algorithm),
            expected,
        }
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    pub fn expected(&self) -> &ExpectedChecksum {
        &self.expected
    }

    /// Hash the artifact and compare. An unreadable artifact is invalid.
    pub fn is_valid(self, reporter: &dyn Reporter) -> bool {
        let digest = match digest_file(&self.artifact, self.hasher) {
            Ok(d) => d,
            Err(e) => {
                reporter.report(ValidationEvent::ArtifactUnreadable {
                    artifact: self.artifact,
                    error: e.to_string(),
                });
                return false;
            }
        };

        let actual = hex::encode(digest);
        if actual == self.expected.value {
            return true;
        }

        reporter.report(ValidationEvent::ChecksumMismatch {
            artifact: self.artifact,
            algorithm: self.expected.algorithm,
            expected: self.expected.value,
            actual,
        });
        false
    }
}

/// Outcome of checksum resolution.
///
/// `NoOp` is used when no checksum could be found for any algorithm; it
/// always passes. That makes a missing checksum indistinguishable from a
/// good one, so deleting both the sidecar and the remote checksum defeats
/// validation.
#[derive(Debug)]
pub enum Validator {
    Digest(DigestValidator),
    NoOp,
}

impl Validator {
    pub fn is_valid(self, reporter: &dyn Reporter) -> bool {
        match self {
            Validator::Digest(v) => v.is_valid(reporter),
            Validator::NoOp => true,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Validator::NoOp)
    }

    /// Expected checksum, if one was resolved.
    pub fn expected(&self) -> Option<&ExpectedChecksum> {
        match self {
            Validator::Digest(v) => Some(v.expected()),
            Validator::NoOp => None,
        }
    }
}
