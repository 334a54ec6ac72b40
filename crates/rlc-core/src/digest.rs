//! Streaming digest computation.
//!
//! Files are read in fixed-size chunks so memory use stays bounded regardless
//! of artifact size. The chunk loop is shared by every algorithm.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::algorithm::Algorithm;

/// Read chunk size.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Hash accumulator for one of the supported algorithms.
#[derive(Clone)]
pub enum Hasher {
    Sha1(Sha1),
    Md5(Md5),
}

impl Hasher {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha1 => Hasher::Sha1(Sha1::new()),
            Algorithm::Md5 => Hasher::Md5(Md5::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Hasher::Sha1(_) => Algorithm::Sha1,
            Hasher::Md5(_) => Algorithm::Md5,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Hasher::Sha1(h) => h.update(data),
            Hasher::Md5(h) => h.update(data),
        }
    }

    /// Consume the accumulator and return the raw digest bytes.
    pub fn finalize(self) -> Vec<u8> {
        match self {
            Hasher::Sha1(h) => h.finalize().to_vec(),
            Hasher::Md5(h) => h.finalize().to_vec(),
        }
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Hasher").field(&self.algorithm()).finish()
    }
}

/// Feed everything `reader` yields into `hasher`, in order, until EOF.
/// On a read error the hasher is dropped and the error returned.
pub fn digest_reader<R: Read>(mut reader: R, mut hasher: Hasher) -> io::Result<Vec<u8>> {
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

/// Digest the file at `path`. The handle is closed on return, including on error.
pub fn digest_file(path: &Path, hasher: Hasher) -> io::Result<Vec<u8>> {
    let f = File::open(path)?;
    digest_reader(f, hasher)
}

/// Digest the file at `path` and return it as lowercase hex.
pub fn hex_digest_file(path: &Path, algorithm: Algorithm) -> io::Result<String> {
    digest_file(path, Hasher::new(algorithm)).map(hex::encode)
}
