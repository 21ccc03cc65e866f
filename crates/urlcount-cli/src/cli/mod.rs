//! CLI for urlcount.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcount_core::config;

use commands::{run_count, run_domains, run_normalize, run_report};

/// Top-level CLI for urlcount.
#[derive(Debug, Parser)]
#[command(name = "urlcount")]
#[command(about = "Count unique normalized URLs, overall and per top-level domain", long_about = None)]
pub struct Cli {
    /// Print skip statistics to stderr and log every skipped input.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print both the unique count and the per-domain counts.
    /// Uses a built-in sample list when no input is given.
    Report {
        /// Files with one URL per line ("-" for stdin).
        files: Vec<PathBuf>,
        /// Split the input across N threads (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Print the number of unique normalized URLs.
    Count {
        /// Files with one URL per line ("-" for stdin; stdin if none).
        files: Vec<PathBuf>,
        /// Split the input across N threads (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Print unique normalized URL counts per top-level domain.
    Domains {
        /// Files with one URL per line ("-" for stdin; stdin if none).
        files: Vec<PathBuf>,
        /// Emit a JSON object instead of "domain count" lines.
        #[arg(long)]
        json: bool,
        /// Split the input across N threads (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Print the canonical form of each input URL.
    Normalize {
        /// Files with one URL per line ("-" for stdin; stdin if none).
        files: Vec<PathBuf>,
        /// Keep paths as parsed instead of cleaning them.
        #[arg(long)]
        raw: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let verbose = self.verbose;

        match self.command {
            CliCommand::Report { files, jobs } => {
                run_report(&cfg, &files, jobs.unwrap_or(cfg.jobs), verbose)?
            }
            CliCommand::Count { files, jobs } => {
                run_count(&cfg, &files, jobs.unwrap_or(cfg.jobs), verbose)?
            }
            CliCommand::Domains { files, json, jobs } => {
                run_domains(&cfg, &files, jobs.unwrap_or(cfg.jobs), json, verbose)?
            }
            CliCommand::Normalize { files, raw } => run_normalize(&files, raw)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
