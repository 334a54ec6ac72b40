//! `rlc scan` – validate every artifact under a repository directory.
//!
//! Sidecar files themselves are skipped. Only local sidecars are consulted;
//! artifacts with no sidecar at all are counted as unverified, not invalid.

use anyhow::{Context, Result};
use rlc_core::config::RlcConfig;
use rlc_core::report::Reporter;
use rlc_core::resolver::Resolver;
use rlc_core::sidecar::is_sidecar;
use rlc_core::NoRemote;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::console::ConsoleReporter;

#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub checked: usize,
    pub valid: usize,
    /// No sidecar for any algorithm; accepted without verification.
    pub unverified: Vec<PathBuf>,
    pub invalid: Vec<PathBuf>,
}

impl ScanReport {
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

pub fn scan_dir(dir: &Path, resolver: &Resolver, reporter: &dyn Reporter) -> Result<ScanReport> {
    let mut report = ScanReport::default();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk {}", dir.display()))?;
        if !entry.file_type().is_file() || is_sidecar(entry.path()) {
            continue;
        }
        let path = entry.path();
        report.checked += 1;

        let validator = resolver.resolve(path, &NoRemote, reporter);
        if validator.is_noop() {
            report.unverified.push(path.to_path_buf());
        } else if validator.is_valid(reporter) {
            report.valid += 1;
        } else {
            report.invalid.push(path.to_path_buf());
        }
    }
    tracing::info!(
        dir = %dir.display(),
        checked = report.checked,
        invalid = report.invalid.len(),
        "scan finished"
    );
    Ok(report)
}

pub fn run_scan(cfg: &RlcConfig, dir: &Path, json: bool) -> Result<bool> {
    let report = scan_dir(dir, &cfg.resolver(), &ConsoleReporter)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{:<10} {:<10} {:<10} {}",
            "CHECKED", "VALID", "INVALID", "UNVERIFIED"
        );
        println!(
            "{:<10} {:<10} {:<10} {}",
            report.checked,
            report.valid,
            report.invalid.len(),
            report.unverified.len()
        );
        for p in &report.invalid {
            println!("invalid {}", p.display());
        }
    }
    Ok(report.all_valid())
}
