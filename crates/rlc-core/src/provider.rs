//! Checksum provider capability: where expected checksums come from when no
//! local sidecar exists.

use std::io;

use crate::algorithm::Algorithm;

/// Supplies the expected checksum for an artifact, typically by fetching it
/// from the artifact's remote origin.
///
/// One attempt per call, no caching or retry. `Ok(None)` means the origin has
/// no checksum for this algorithm; `Err` is any retrieval failure.
pub trait ChecksumProvider {
    fn get_checksum(&self, algorithm: Algorithm) -> io::Result<Option<String>>;

    /// False for providers that never consult anything outside the local
    /// repository; the resolver then skips them without logging a lookup.
    fn is_remote(&self) -> bool {
        true
    }
}

impl<F> ChecksumProvider for F
where
    F: Fn(Algorithm) -> io::Result<Option<String>>,
{
    fn get_checksum(&self, algorithm: Algorithm) -> io::Result<Option<String>> {
        self(algorithm)
    }
}

/// Provider for offline use: never has a checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemote;

impl ChecksumProvider for NoRemote {
    fn get_checksum(&self, _algorithm: Algorithm) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn is_remote(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_provider() {
        let p = |alg: Algorithm| -> io::Result<Option<String>> {
            Ok(Some(format!("value-for-{}", alg.extension())))
        };
        assert_eq!(
            p.get_checksum(Algorithm::Md5).unwrap().as_deref(),
            Some("value-for-md5")
        );
    }

    #[test]
    fn no_remote_returns_none() {
        assert!(NoRemote.get_checksum(Algorithm::Sha1).unwrap().is_none());
        assert!(!NoRemote.is_remote());
    }

    #[test]
    fn closures_count_as_remote() {
        let p = |_: Algorithm| -> io::Result<Option<String>> { Ok(None) };
        assert!(p.is_remote());
    }
}
