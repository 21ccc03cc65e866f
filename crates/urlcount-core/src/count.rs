//! Counting entry points.
//!
//! The two plain functions reproduce the established behavior:
//! [`count_unique_urls`] cleans paths, while
//! [`count_unique_urls_per_top_level_domain`] compares paths as parsed, so
//! `https://example.com/page1` and `https://example.com/page1/` are one URL
//! globally but two within `example.com`. [`CountConfig`] makes that choice
//! explicit for callers that want the two counts to agree.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::normalize::PathMode;
use crate::tally::{TallyStats, UrlTally};

/// Path modes used by the two counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountConfig {
    pub unique_path_mode: PathMode,
    pub per_domain_path_mode: PathMode,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            unique_path_mode: PathMode::Clean,
            per_domain_path_mode: PathMode::Raw,
        }
    }
}

impl CountConfig {
    /// Both counts clean paths.
    pub fn unified() -> Self {
        Self {
            unique_path_mode: PathMode::Clean,
            per_domain_path_mode: PathMode::Clean,
        }
    }
}

/// Result of one counting pass, with attrition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyReport {
    pub path_mode: PathMode,
    pub unique: usize,
    pub domains: HashMap<String, usize>,
    pub stats: TallyStats,
}

impl From<&UrlTally> for TallyReport {
    fn from(tally: &UrlTally) -> Self {
        Self {
            path_mode: tally.mode(),
            unique: tally.unique_count(),
            domains: tally.domain_counts(),
            stats: tally.stats(),
        }
    }
}

/// Number of distinct normalized URLs among the parseable inputs.
///
/// Unparseable inputs are ignored. Input order does not matter.
///
/// # Examples
///
/// - `["https://example.com", "https://example.com/"]` → 1
/// - `["https://example.com", "http://example.com"]` → 2
/// - `["https://example.com?a=1&b=2", "https://example.com?b=2&a=1"]` → 1
pub fn count_unique_urls<S: AsRef<str>>(urls: &[S]) -> usize {
    unique_url_report(urls, &CountConfig::default()).unique
}

/// Number of distinct normalized URLs per top-level domain (the last two
/// labels of the host).
///
/// Hosts with a single label and unparseable inputs contribute to no bucket.
///
/// # Examples
///
/// - `["https://example.com", "https://subdomain.example.com"]` → `{"example.com": 2}`
/// - `["http://example", "invalidurl"]` → `{}`
pub fn count_unique_urls_per_top_level_domain<S: AsRef<str>>(urls: &[S]) -> HashMap<String, usize> {
    domain_report(urls, &CountConfig::default()).domains
}

/// Global count with attrition, using `cfg.unique_path_mode`.
pub fn unique_url_report<S: AsRef<str>>(urls: &[S], cfg: &CountConfig) -> TallyReport {
    report_with_mode(urls, cfg.unique_path_mode)
}

/// Per-domain count with attrition, using `cfg.per_domain_path_mode`.
pub fn domain_report<S: AsRef<str>>(urls: &[S], cfg: &CountConfig) -> TallyReport {
    report_with_mode(urls, cfg.per_domain_path_mode)
}

fn report_with_mode<S: AsRef<str>>(urls: &[S], mode: PathMode) -> TallyReport {
    let mut tally = UrlTally::new(mode);
    tally.extend(urls);
    let report = TallyReport::from(&tally);
    tracing::debug!(
        mode = %mode,
        seen = report.stats.seen,
        unique = report.unique,
        unparseable = report.stats.unparseable,
        "tally complete"
    );
    report
}
