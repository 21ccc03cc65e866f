//! `urlcount normalize` – canonical form of each input.

use anyhow::Result;
use std::path::PathBuf;
use urlcount_core::{normalize_url, PathMode};

use crate::cli::input::load_urls;

pub fn run_normalize(files: &[PathBuf], raw: bool) -> Result<()> {
    let mode = if raw { PathMode::Raw } else { PathMode::Clean };
    for url in load_urls(files)? {
        println!("{}", normalize_line(&url, mode));
    }
    Ok(())
}

/// Canonical form, or `skip: <reason>` for inputs that do not parse.
pub fn normalize_line(input: &str, mode: PathMode) -> String {
    match normalize_url(input, mode) {
        Ok(canonical) => canonical.into_string(),
        Err(e) => format!("skip: {e}"),
    }
}
