//! `urlcount report` – both counts, overall and per top-level domain.

use anyhow::Result;
use std::path::PathBuf;
use urlcount_core::config::UrlcountConfig;
use urlcount_core::{tally_partitioned, TallyReport};

use super::domains::domains_table;
use super::stats::eprint_stats;
use crate::cli::input::load_urls_or_sample;

pub fn run_report(
    cfg: &UrlcountConfig,
    files: &[PathBuf],
    jobs: usize,
    verbose: bool,
) -> Result<()> {
    let urls = load_urls_or_sample(files)?;
    let count_cfg = cfg.count_config();
    let unique = TallyReport::from(&tally_partitioned(&urls, count_cfg.unique_path_mode, jobs)?);
    let domains = TallyReport::from(&tally_partitioned(&urls, count_cfg.per_domain_path_mode, jobs)?);

    print!("{}", format_report(&unique, &domains));
    if verbose {
        eprint_stats("unique", &unique.stats);
        eprint_stats("per-domain", &domains.stats);
    }
    Ok(())
}

pub fn format_report(unique: &TallyReport, domains: &TallyReport) -> String {
    let mut out = format!("Number of unique normalized URLs: {}\n", unique.unique);
    out.push_str("Number of unique normalized URLs per top level domain:\n");
    for line in domains_table(&domains.domains).lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlcount_core::input::SAMPLE_URLS;
    use urlcount_core::{domain_report, unique_url_report, CountConfig, PathMode};

    #[test]
    fn sample_report() {
        let cfg = CountConfig::default();
        let unique = unique_url_report(SAMPLE_URLS, &cfg);
        let domains = domain_report(SAMPLE_URLS, &cfg);
        assert_eq!(
            format_report(&unique, &domains),
            "Number of unique normalized URLs: 5\n\
             Number of unique normalized URLs per top level domain:\n  \
             example.com 3\n  \
             example.net 1\n  \
             example.org 1\n"
        );
    }

    #[test]
    fn partitioned_report_matches_sequential() {
        let cfg = CountConfig::default();
        let expected = format_report(
            &unique_url_report(SAMPLE_URLS, &cfg),
            &domain_report(SAMPLE_URLS, &cfg),
        );
        for jobs in [1, 3, 16] {
            let unique = TallyReport::from(&tally_partitioned(SAMPLE_URLS, PathMode::Clean, jobs).unwrap());
            let domains = TallyReport::from(&tally_partitioned(SAMPLE_URLS, PathMode::Raw, jobs).unwrap());
            assert_eq!(format_report(&unique, &domains), expected, "jobs={jobs}");
        }
    }
}
