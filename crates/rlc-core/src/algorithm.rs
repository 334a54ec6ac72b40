//! Checksum algorithms and their preference order.

use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedAlgorithm;

/// Hash algorithm used to validate an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Md5,
}

/// Default resolution order: strongest first, MD5 only as a legacy fallback.
pub const PREFERENCE: [Algorithm; 2] = [Algorithm::Sha1, Algorithm::Md5];

impl Algorithm {
    /// Canonical name as used by repository metadata (`"SHA-1"`, `"MD5"`).
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Md5 => "MD5",
        }
    }

    /// Sidecar/remote file extension: the name lowercased without hyphens.
    pub fn extension(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Md5 => "md5",
        }
    }

    /// Length of the lowercase hex digest.
    pub fn hex_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 40,
            Algorithm::Md5 => 32,
        }
    }

    /// Parse an algorithm name. Accepts `SHA-1`, `sha1`, `Sha-1`, `MD5`, `md5`.
    pub fn from_name(name: &str) -> Result<Self, UnsupportedAlgorithm> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "md5" => Ok(Algorithm::Md5),
            _ => Err(UnsupportedAlgorithm {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}

/// Default algorithm list as names, in preference order.
pub fn default_algorithm_names() -> Vec<String> {
    PREFERENCE.iter().map(|a| a.name().to_string()).collect()
}
