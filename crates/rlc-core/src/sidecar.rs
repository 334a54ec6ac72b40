//! Sidecar checksum files (`<artifact>.sha1`, `<artifact>.md5`).

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::algorithm::Algorithm;
use crate::error::SidecarError;

/// Path of the sidecar for `artifact`: appends `.<ext>` (e.g. `lib.jar` → `lib.jar.sha1`).
pub fn sidecar_path(artifact: &Path, algorithm: Algorithm) -> PathBuf {
    let mut o = artifact.as_os_str().to_owned();
    o.push(".");
    o.push(algorithm.extension());
    PathBuf::from(o)
}

/// True when `path` ends in a known checksum extension.
pub fn is_sidecar(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            crate::algorithm::PREFERENCE
                .iter()
                .any(|a| a.extension().eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Upper bound on bytes read from a checksum file.
pub const MAX_SIDECAR_BYTES: u64 = 4 * 1024;

/// Read a checksum file and extract the hex value.
///
/// At most [`MAX_SIDECAR_BYTES`] are read; a line cut by the limit is dropped.
pub fn read_sidecar(path: &Path) -> Result<String, SidecarError> {
    let io_err = |source: io::Error| SidecarError::Io {
        path: path.to_path_buf(),
        source,
    };
    let text = read_capped(path).map_err(io_err)?;
    parse_checksum(&text).ok_or_else(|| SidecarError::Empty {
        path: path.to_path_buf(),
    })
}

fn read_capped(path: &Path) -> io::Result<String> {
    let mut buf = Vec::new();
    File::open(path)?
        .take(MAX_SIDECAR_BYTES)
        .read_to_end(&mut buf)?;
    if buf.len() as u64 == MAX_SIDECAR_BYTES {
        if let Some(end) = buf.iter().rposition(|&b| b == b'\n') {
            buf.truncate(end + 1);
        }
    }
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Extract the checksum from checksum-file text.
///
/// Uses the first non-blank line. Handles the plain form (`<hex>`), the GNU
/// coreutils form (`<hex>  <file>`) and the BSD form (`SHA1 (<file>) = <hex>`).
pub fn parse_checksum(text: &str) -> Option<String> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;

    if let Some((_, tail)) = line.rsplit_once("= ") {
        let tail = tail.trim();
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some(tail.to_string());
        }
    }

    line.split_whitespace().next().map(str::to_string)
}
