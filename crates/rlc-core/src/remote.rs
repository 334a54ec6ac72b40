//! Checksum provider backed by the artifact's remote origin.

use std::io;

use crate::algorithm::Algorithm;
use crate::error::SidecarError;
use crate::provider::ChecksumProvider;
use crate::sidecar::read_sidecar;
use crate::transport::Transport;

/// Remote checksum location: the artifact location with `.<ext>` appended.
pub fn checksum_location(artifact_location: &str, algorithm: Algorithm) -> String {
    format!("{}.{}", artifact_location, algorithm.extension())
}

/// Fetches `<artifact location>.<ext>` into a temp file and parses it.
///
/// The temp file is removed when the call returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct RemoteChecksumProvider<T> {
    artifact_location: String,
    transport: T,
}

impl<T: Transport> RemoteChecksumProvider<T> {
    pub fn new(artifact_location: impl Into<String>, transport: T) -> Self {
        Self {
            artifact_location: artifact_location.into(),
            transport,
        }
    }

    pub fn artifact_location(&self) -> &str {
        &self.artifact_location
    }
}

impl<T: Transport> ChecksumProvider for RemoteChecksumProvider<T> {
    fn get_checksum(&self, algorithm: Algorithm) -> io::Result<Option<String>> {
        let location = checksum_location(&self.artifact_location, algorithm);
        let tmp = tempfile::Builder::new()
            .prefix("checksum-")
            .suffix(&format!(".{}", algorithm.extension()))
            .tempfile()?;

        self.transport.get(&location, tmp.path())?;

        match read_sidecar(tmp.path()) {
            Ok(value) => Ok(Some(value)),
            Err(SidecarError::Empty { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
