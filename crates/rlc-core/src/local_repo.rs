//! Local repository lookup with checksum validation.
//!
//! The surrounding cache finds an artifact on disk and hands the lookup result
//! here. If the cached file fails validation the result is rewritten so that
//! the artifact looks missing and gets fetched again.

use std::path::{Path, PathBuf};

use crate::provider::{ChecksumProvider, NoRemote};
use crate::remote::RemoteChecksumProvider;
use crate::report::Reporter;
use crate::resolver::Resolver;
use crate::transport::{SchemeTransport, Transport};

/// Result of looking an artifact up in the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalArtifactResult {
    /// Cached file, if any.
    pub file: Option<PathBuf>,
    /// Whether the cache considers the artifact usable.
    pub available: bool,
    /// Remote location the artifact was fetched from (`None` for locally installed artifacts).
    pub remote_location: Option<String>,
}

impl LocalArtifactResult {
    pub fn available(file: impl Into<PathBuf>, remote_location: Option<String>) -> Self {
        Self {
            file: Some(file.into()),
            available: true,
            remote_location,
        }
    }

    /// Mark the artifact as not locally available. Both fields must change:
    /// resolvers treat either a missing file or `available == false` as a miss.
    pub fn mark_missing(&mut self) {
        self.available = false;
        self.file = None;
    }
}

/// Whether the cached copy at `artifact` can be trusted.
pub fn verify_artifact(
    artifact: &Path,
    provider: &dyn ChecksumProvider,
    resolver: &Resolver,
    reporter: &dyn Reporter,
) -> bool {
    resolver.resolve(artifact, provider, reporter).is_valid(reporter)
}

/// Wraps local lookups with checksum validation.
#[derive(Debug, Clone)]
pub struct ValidatingLocalRepo<T = SchemeTransport> {
    resolver: Resolver,
    transport: T,
}

impl<T: Transport> ValidatingLocalRepo<T> {
    pub fn new(resolver: Resolver, transport: T) -> Self {
        Self {
            resolver,
            transport,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Validate a lookup result; invalid artifacts come back marked missing.
    pub fn find(&self, mut result: LocalArtifactResult, reporter: &dyn Reporter) -> LocalArtifactResult {
        let file = match &result.file {
            Some(f) if result.available && f.is_file() => f.clone(),
            _ => return result,
        };

        let valid = match &result.remote_location {
            Some(location) => {
                let provider = RemoteChecksumProvider::new(location.as_str(), &self.transport);
                verify_artifact(&file, &provider, &self.resolver, reporter)
            }
            None => verify_artifact(&file, &NoRemote, &self.resolver, reporter),
        };

        if !valid {
            tracing::debug!(artifact = %file.display(), "cached artifact rejected, marking missing");
            result.mark_missing();
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::report::{RecordingReporter, ValidationEvent};
    use std::fs;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    /// Transport that must never be used.
    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, location: &str, _dest: &Path) -> Result<(), TransportError> {
            panic!("unexpected fetch of {location}");
        }
    }

    /// Transport with nothing published.
    struct Empty404;

    impl Transport for Empty404 {
        fn get(&self, location: &str, _dest: &Path) -> Result<(), TransportError> {
            Err(TransportError::Status {
                status: 404,
                location: location.to_string(),
            })
        }
    }

    fn cached(dir: &Path, sidecar: Option<&str>) -> PathBuf {
        let artifact = dir.join("lib-1.0.jar");
        fs::write(&artifact, b"").unwrap();
        if let Some(s) = sidecar {
            fs::write(dir.join("lib-1.0.jar.sha1"), s).unwrap();
        }
        artifact
    }

    #[test]
    fn valid_artifact_stays_available() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = cached(dir.path(), Some(EMPTY_SHA1));
        let repo = ValidatingLocalRepo::new(Resolver::default(), Unreachable);
        let r = RecordingReporter::new();

        let input = LocalArtifactResult::available(&artifact, Some("https://r/lib-1.0.jar".into()));
        let out = repo.find(input.clone(), &r);
        assert_eq!(out, input);
    }

    #[test]
    fn corrupt_artifact_is_marked_missing() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = cached(dir.path(), Some("0000000000000000000000000000000000000000"));
        let repo = ValidatingLocalRepo::new(Resolver::default(), Unreachable);
        let r = RecordingReporter::new();

        let out = repo.find(LocalArtifactResult::available(&artifact, None), &r);
        assert!(!out.available);
        assert!(out.file.is_none());
        assert_eq!(r.mismatches(), 1);
    }

    #[test]
    fn unavailable_result_is_untouched() {
        let repo = ValidatingLocalRepo::new(Resolver::default(), Unreachable);
        let r = RecordingReporter::new();
        let input = LocalArtifactResult {
            file: Some(PathBuf::from("/nonexistent/x.jar")),
            available: false,
            remote_location: Some("https://r/x.jar".into()),
        };
        assert_eq!(repo.find(input.clone(), &r), input);
        assert!(r.events().is_empty());
    }

    #[test]
    fn directory_in_place_of_file_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ValidatingLocalRepo::new(Resolver::default(), Unreachable);
        let r = RecordingReporter::new();
        let input = LocalArtifactResult::available(dir.path(), None);
        assert_eq!(repo.find(input.clone(), &r), input);
    }

    #[test]
    fn no_checksum_anywhere_stays_available() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = cached(dir.path(), None);
        let repo = ValidatingLocalRepo::new(Resolver::default(), Empty404);
        let r = RecordingReporter::new();

        let out = repo.find(
            LocalArtifactResult::available(&artifact, Some("https://r/lib-1.0.jar".into())),
            &r,
        );
        assert!(out.available);
        assert_eq!(out.file.as_deref(), Some(artifact.as_path()));
        let failed = r
            .events()
            .into_iter()
            .filter(|e| matches!(e, ValidationEvent::RemoteChecksumFailed { .. }))
            .count();
        assert_eq!(failed, 2);
    }

    #[test]
    fn locally_installed_artifact_never_goes_remote() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = cached(dir.path(), None);
        let repo = ValidatingLocalRepo::new(Resolver::default(), Unreachable);
        let r = RecordingReporter::new();

        let out = repo.find(LocalArtifactResult::available(&artifact, None), &r);
        assert!(out.available);
        assert!(r.events().is_empty(), "unexpected events: {:?}", r.events());
    }

    #[test]
    fn mark_missing_clears_both_fields() {
        let mut res = LocalArtifactResult::available("a.jar", None);
        res.mark_missing();
        assert!(!res.available);
        assert!(res.file.is_none());
    }
}
