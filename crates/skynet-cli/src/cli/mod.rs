//! CLI for the Skynet portal client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use skynet_core::config;
use skynet_core::SkynetClient;
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_download, run_query, run_upload};

/// Top-level CLI for the Skynet portal client.
#[derive(Debug, Parser)]
#[command(name = "skynet")]
#[command(about = "Upload to and download from Skynet portals", long_about = None)]
pub struct Cli {
    /// Portal base URL; overrides the configured one.
    #[arg(long, global = true, value_name = "URL")]
    pub portal: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Upload a file, or a directory as a multi-file upload.
    Upload {
        /// Local file or directory.
        path: PathBuf,
    },

    /// Show the metadata of a skylink without downloading it.
    Query {
        /// Skylink, with or without `sia://`.
        skylink: String,
    },

    /// Download the content of a skylink.
    Download {
        /// Skylink, with or without `sia://`.
        skylink: String,
        /// Output file (default: portal-provided filename in the current dir).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Compute SHA-256 of a local file (e.g. to compare with a download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(portal) = cli.portal {
            cfg.portal.base_url = portal;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Upload { path } => run_upload(SkynetClient::from_config(&cfg), path).await?,
            CliCommand::Query { skylink } => {
                run_query(SkynetClient::from_config(&cfg), skylink).await?
            }
            CliCommand::Download { skylink, output } => {
                let cwd = std::env::current_dir()?;
                run_download(SkynetClient::from_config(&cfg), skylink, output, &cwd).await?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path)).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
