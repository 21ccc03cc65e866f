//! Gathering input URLs from files and stdin.

use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use urlcount_core::input::{read_urls, read_urls_from_path, SAMPLE_URLS};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads every file in order ("-" is stdin). With no files, reads stdin.
pub fn load_urls(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        return read_urls(io::stdin().lock()).context("read stdin");
    }
    let mut urls = Vec::new();
    for path in files {
        if is_stdin(path) {
            urls.extend(read_urls(io::stdin().lock()).context("read stdin")?);
        } else {
            urls.extend(read_urls_from_path(path)?);
        }
    }
    Ok(urls)
}

/// Like [`load_urls`], but falls back to the sample list when no files are
/// given and stdin is an interactive terminal.
pub fn load_urls_or_sample(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() && io::stdin().is_terminal() {
        tracing::info!("no input given, using built-in sample list");
        return Ok(SAMPLE_URLS.iter().map(|s| s.to_string()).collect());
    }
    load_urls(files)
}
