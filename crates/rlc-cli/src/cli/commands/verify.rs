//! `rlc verify` – validate one cached artifact.

use anyhow::{bail, Result};
use rlc_core::config::RlcConfig;
use rlc_core::transport::SchemeTransport;
use rlc_core::{LocalArtifactResult, ValidatingLocalRepo};
use std::path::Path;

use super::console::ConsoleReporter;

/// Returns whether the artifact can be trusted.
pub fn run_verify(cfg: &RlcConfig, artifact: &Path, remote: Option<String>) -> Result<bool> {
    if !artifact.is_file() {
        bail!("{} is not a file", artifact.display());
    }

    let repo = ValidatingLocalRepo::new(cfg.resolver(), SchemeTransport::from_config(&cfg.remote));
    let result = repo.find(LocalArtifactResult::available(artifact, remote), &ConsoleReporter);

    if result.available {
        println!("ok {}", artifact.display());
        Ok(true)
    } else {
        println!("invalid {}", artifact.display());
        Ok(false)
    }
}
