//! Fetching remote files (checksum files only; artifacts are never downloaded here).
//!
//! HTTP(S) goes through libcurl via the curl crate; `file://` URLs and bare
//! paths are copied from the local filesystem.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::RemoteConfig;
use crate::error::TransportError;

/// Downloads `location` into `dest`, overwriting it.
pub trait Transport {
    fn get(&self, location: &str, dest: &Path) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, location: &str, dest: &Path) -> Result<(), TransportError> {
        (**self).get(location, dest)
    }
}

/// HTTP(S) GET via curl's easy interface. Blocks the calling thread.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&RemoteConfig::default())
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &RemoteConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

impl Transport for CurlTransport {
    fn get(&self, location: &str, dest: &Path) -> Result<(), TransportError> {
        let mut file = File::create(dest)?;
        let mut write_err: Option<io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(location)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    // Short write makes curl abort the transfer.
                    Ok(0)
                }
            })?;
            transfer.perform()
        };
        if let Some(e) = write_err {
            return Err(TransportError::Io(e));
        }
        performed?;

        let status = easy.response_code()?;
        if status >= 400 {
            return Err(TransportError::Status {
                status,
                location: location.to_string(),
            });
        }
        file.flush()?;
        tracing::debug!(location, status, "fetched remote file");
        Ok(())
    }
}

/// Copies from the local filesystem (`file://` URL or plain path).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTransport;

impl FileTransport {
    fn source_path(location: &str) -> Result<PathBuf, TransportError> {
        if location.starts_with("file:") {
            let parsed = url::Url::parse(location)
                .map_err(|_| TransportError::UnsupportedLocation(location.to_string()))?;
            return parsed
                .to_file_path()
                .map_err(|_| TransportError::UnsupportedLocation(location.to_string()));
        }
        Ok(PathBuf::from(location))
    }
}

impl Transport for FileTransport {
    fn get(&self, location: &str, dest: &Path) -> Result<(), TransportError> {
        let src = Self::source_path(location)?;
        fs::copy(&src, dest)?;
        Ok(())
    }
}

/// Picks curl or the filesystem by the location's scheme.
#[derive(Debug, Clone, Default)]
pub struct SchemeTransport {
    pub http: CurlTransport,
    pub file: FileTransport,
}

impl SchemeTransport {
    pub fn from_config(cfg: &RemoteConfig) -> Self {
        Self {
            http: CurlTransport::from_config(cfg),
            file: FileTransport,
        }
    }
}

impl Transport for SchemeTransport {
    fn get(&self, location: &str, dest: &Path) -> Result<(), TransportError> {
        match url::Url::parse(location) {
            Ok(u) => match u.scheme() {
                "http" | "https" => self.http.get(location, dest),
                "file" => self.file.get(location, dest),
                _ => Err(TransportError::UnsupportedLocation(location.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => self.file.get(location, dest),
            Err(_) => Err(TransportError::UnsupportedLocation(location.to_string())),
        }
    }
}
