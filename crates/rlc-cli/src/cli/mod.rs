//! CLI for the RLC artifact cache validator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rlc_core::config;
use std::path::Path;

use commands::{run_checksum, run_scan, run_verify};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rlc")]
#[command(about = "RLC: checksum validation for locally cached build artifacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check one cached artifact against its sidecar or remote checksum.
    Verify {
        /// Path to the cached artifact.
        artifact: String,
        /// Remote location the artifact was fetched from; `<remote>.sha1` / `.md5` are tried.
        /// Without it only local sidecar files are used.
        #[arg(long, value_name = "URL")]
        remote: Option<String>,
    },

    /// Check every artifact under a local repository directory against its sidecars.
    Scan {
        /// Repository root.
        dir: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the digest of a file.
    Checksum {
        /// Path to the file.
        path: String,
        /// Digest algorithm (sha1 or md5).
        #[arg(long, short, default_value = "sha1")]
        algorithm: String,
    },
}

impl CliCommand {
    /// Runs the parsed command. `Ok(false)` means some artifact failed validation.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify { artifact, remote } => {
                run_verify(&cfg, Path::new(&artifact), remote)
            }
            CliCommand::Scan { dir, json } => run_scan(&cfg, Path::new(&dir), json),
            CliCommand::Checksum { path, algorithm } => {
                run_checksum(Path::new(&path), &algorithm)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests;
