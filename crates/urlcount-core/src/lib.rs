//! URL normalization and deduplication.
//!
//! [`count_unique_urls`] counts distinct normalized URLs;
//! [`count_unique_urls_per_top_level_domain`] groups the same count by the
//! last two labels of each host. Both ignore inputs that do not parse.

pub mod config;
pub mod logging;

pub mod count;
pub mod domain;
pub mod input;
pub mod normalize;
pub mod tally;

pub use count::{
    count_unique_urls, count_unique_urls_per_top_level_domain, domain_report, unique_url_report,
    CountConfig, TallyReport,
};
pub use domain::DomainKey;
pub use normalize::{normalize_url, CanonicalUrl, NormalizeError, ParseCause, PathMode};
pub use tally::{tally_partitioned, Ingested, TallyStats, UrlTally};
