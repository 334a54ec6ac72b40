//! Error types for checksum lookup. None of these cross the validation boundary;
//! the resolver reports them and falls back.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Algorithm name that the hashing backend cannot compute.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported checksum algorithm: {name}")]
pub struct UnsupportedAlgorithm {
    pub name: String,
}

/// Failure reading a checksum file (local sidecar or downloaded copy).
#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File exists but holds no checksum.
    #[error("{} contains no checksum", path.display())]
    Empty { path: PathBuf },
}

impl From<SidecarError> for io::Error {
    fn from(e: SidecarError) -> Self {
        match e {
            SidecarError::Io { source, .. } => source,
            empty => io::Error::new(io::ErrorKind::InvalidData, empty),
        }
    }
}

/// Failure fetching a remote checksum file.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// Server answered with an error status (404 when the checksum is not published).
    #[error("HTTP {status} for {location}")]
    Status { status: u32, location: String },
    #[error("unsupported location: {0}")]
    UnsupportedLocation(String),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl From<TransportError> for io::Error {
    fn from(e: TransportError) -> Self {
        let kind = match &e {
            TransportError::Status {
                status: 404 | 410, ..
            } => io::ErrorKind::NotFound,
            _ => io::ErrorKind::Other,
        };
        match e {
            TransportError::Io(inner) => inner,
            other => io::Error::new(kind, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_not_found() {
        let e: io::Error = TransportError::Status {
            status: 404,
            location: "https://repo.example.com/a.jar.sha1".to_string(),
        }
        .into();
        assert_eq!(e.kind(), io::ErrorKind::NotFound);
        assert!(e.to_string().contains("HTTP 404"));
    }

    #[test]
    fn status_500_maps_to_other() {
        let e: io::Error = TransportError::Status {
            status: 500,
            location: "x".to_string(),
        }
        .into();
        assert_eq!(e.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn empty_sidecar_is_invalid_data() {
        let e: io::Error = SidecarError::Empty {
            path: PathBuf::from("a.jar.sha1"),
        }
        .into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert!(e.to_string().contains("a.jar.sha1"));
    }
}
