//! Checksum command: print the digest of a file.

use anyhow::{Context, Result};
use rlc_core::digest;
use rlc_core::Algorithm;
use std::path::Path;

/// Compute and print the digest of the given file in `sha1sum` format.
pub fn run_checksum(path: &Path, algorithm: &str) -> Result<()> {
    let algorithm = Algorithm::from_name(algorithm)?;
    let digest = digest::hex_digest_file(path, algorithm)
        .with_context(|| format!("{} of {}", algorithm, path.display()))?;
    println!("{}  {}", digest, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_algorithm_is_an_error() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = run_checksum(f.path(), "sha512").unwrap_err();
        assert!(err.to_string().contains("unsupported checksum algorithm"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_checksum(&dir.path().join("nope"), "md5").is_err());
    }
}
