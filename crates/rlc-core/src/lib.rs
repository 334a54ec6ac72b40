//! Checksum validation for locally cached build artifacts.
//!
//! Before a cached artifact is reported as available, its content is hashed
//! and compared with a checksum from a sidecar file next to it or, failing
//! that, from the artifact's remote origin. Mismatches and unreadable
//! artifacts are rejected. An artifact with no checksum anywhere is accepted.

pub mod config;
pub mod logging;

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod local_repo;
pub mod provider;
pub mod remote;
pub mod report;
pub mod resolver;
pub mod sidecar;
pub mod transport;
pub mod validator;

pub use algorithm::Algorithm;
pub use local_repo::{verify_artifact, LocalArtifactResult, ValidatingLocalRepo};
pub use provider::{ChecksumProvider, NoRemote};
pub use report::{RecordingReporter, Reporter, TracingReporter, ValidationEvent};
pub use resolver::Resolver;
pub use validator::{ChecksumSource, ExpectedChecksum, Validator};
