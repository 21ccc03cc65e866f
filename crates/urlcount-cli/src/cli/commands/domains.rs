//! `urlcount domains` – unique normalized URLs per top-level domain.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use urlcount_core::config::UrlcountConfig;
use urlcount_core::tally_partitioned;

use super::stats::eprint_stats;
use crate::cli::input::load_urls;

pub fn run_domains(
    cfg: &UrlcountConfig,
    files: &[PathBuf],
    jobs: usize,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let urls = load_urls(files)?;
    let tally = tally_partitioned(&urls, cfg.per_domain_path_mode, jobs)?;
    let counts = tally.domain_counts();
    tracing::info!(inputs = urls.len(), domains = counts.len(), "domains finished");

    if json {
        println!("{}", domains_json(&counts)?);
    } else {
        print!("{}", domains_table(&counts));
    }
    if verbose {
        eprint_stats("domains", &tally.stats());
    }
    Ok(())
}

/// "domain count" lines sorted by domain.
pub fn domains_table(counts: &HashMap<String, usize>) -> String {
    let sorted: BTreeMap<_, _> = counts.iter().collect();
    let width = sorted.keys().map(|d| d.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (domain, count) in sorted {
        out.push_str(&format!("{:<width$} {}\n", domain, count, width = width));
    }
    out
}

pub fn domains_json(counts: &HashMap<String, usize>) -> Result<String> {
    let sorted: BTreeMap<_, _> = counts.iter().collect();
    serde_json::to_string_pretty(&sorted).context("serialize domain counts")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, usize> {
        HashMap::from([
            ("example.org".to_string(), 1),
            ("anotherexample.com".to_string(), 1),
            ("example.com".to_string(), 5),
        ])
    }

    #[test]
    fn table_is_sorted_and_aligned() {
        assert_eq!(
            domains_table(&sample()),
            "anotherexample.com 1\nexample.com        5\nexample.org        1\n"
        );
    }

    #[test]
    fn table_of_nothing_is_empty() {
        assert_eq!(domains_table(&HashMap::new()), "");
    }

    #[test]
    fn json_object_sorted_by_key() {
        let json = domains_json(&sample()).unwrap();
        let parsed: BTreeMap<String, usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["example.com"], 5);
        assert!(json.find("anotherexample.com").unwrap() < json.find("example.org").unwrap());
        assert_eq!(domains_json(&HashMap::new()).unwrap(), "{}");
    }
}
