//! `urlcount count` – number of unique normalized URLs.

use anyhow::Result;
use std::path::PathBuf;
use urlcount_core::config::UrlcountConfig;
use urlcount_core::tally_partitioned;

use super::stats::eprint_stats;
use crate::cli::input::load_urls;

pub fn run_count(cfg: &UrlcountConfig, files: &[PathBuf], jobs: usize, verbose: bool) -> Result<()> {
    let urls = load_urls(files)?;
    let tally = tally_partitioned(&urls, cfg.unique_path_mode, jobs)?;
    tracing::info!(inputs = urls.len(), unique = tally.unique_count(), "count finished");
    println!("{}", tally.unique_count());
    if verbose {
        eprint_stats("count", &tally.stats());
    }
    Ok(())
}
