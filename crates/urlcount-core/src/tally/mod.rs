//! Accumulator of canonical URLs.
//!
//! A [`UrlTally`] is the single-pass fold behind both counting functions: it
//! normalizes each input, remembers every distinct canonical URL together
//! with the top-level domain its host belongs to, and keeps attrition
//! counters so skipped inputs stay observable. Per-domain counts are derived
//! from the deduplicated set, never accumulated incrementally, which keeps
//! [`UrlTally::merge`] exact.

mod parallel;

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::DomainKey;
use crate::normalize::{normalize_url, CanonicalUrl, NormalizeError, PathMode};

pub use parallel::tally_partitioned;

/// What happened to an input that parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    /// First time this canonical URL was seen.
    New,
    /// Canonical URL was already in the tally.
    Duplicate,
}

/// Attrition counters for one tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TallyStats {
    /// Inputs offered to the tally.
    pub seen: usize,
    /// Distinct canonical URLs.
    pub unique: usize,
    /// Parseable inputs whose canonical URL was already present.
    pub duplicates: usize,
    /// Inputs the parser rejected.
    pub unparseable: usize,
    /// Distinct canonical URLs whose host yields no top-level domain.
    pub without_domain: usize,
}

#[derive(Debug, Clone)]
pub struct UrlTally {
    mode: PathMode,
    forms: HashMap<CanonicalUrl, Option<DomainKey>>,
    seen: usize,
    unparseable: usize,
}

impl UrlTally {
    pub fn new(mode: PathMode) -> Self {
        Self {
            mode,
            forms: HashMap::new(),
            seen: 0,
            unparseable: 0,
        }
    }

    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// Normalizes `input` and records it. Unparseable inputs are counted in
    /// [`TallyStats::unparseable`] and returned as the error.
    pub fn ingest(&mut self, input: &str) -> Result<Ingested, NormalizeError> {
        self.seen += 1;
        let canonical = match normalize_url(input, self.mode) {
            Ok(c) => c,
            Err(e) => {
                self.unparseable += 1;
                tracing::debug!(input, "skipping unparseable URL");
                return Err(e);
            }
        };

        if self.forms.contains_key(&canonical) {
            return Ok(Ingested::Duplicate);
        }
        let domain = canonical.host().and_then(DomainKey::from_host);
        self.forms.insert(canonical, domain);
        Ok(Ingested::New)
    }

    /// Ingests every input, ignoring skips (they remain in [`Self::stats`]).
    pub fn extend<I, S>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for input in inputs {
            let _ = self.ingest(input.as_ref());
        }
    }

    /// Folds `other` into `self`. Canonical URLs present in both count once.
    pub fn merge(&mut self, other: UrlTally) -> Result<()> {
        if other.mode != self.mode {
            bail!(
                "cannot merge tallies with different path modes ({} vs {})",
                self.mode,
                other.mode
            );
        }
        self.seen += other.seen;
        self.unparseable += other.unparseable;
        for (canonical, domain) in other.forms {
            self.forms.entry(canonical).or_insert(domain);
        }
        Ok(())
    }

    pub fn unique_count(&self) -> usize {
        self.forms.len()
    }

    /// Distinct canonical URLs per top-level domain. URLs without a domain
    /// key are left out.
    pub fn domain_counts(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for domain in self.forms.values().flatten() {
            *counts.entry(domain.as_str().to_string()).or_default() += 1;
        }
        counts
    }

    pub fn stats(&self) -> TallyStats {
        let unique = self.forms.len();
        TallyStats {
            seen: self.seen,
            unique,
            duplicates: self.seen - self.unparseable - unique,
            unparseable: self.unparseable,
            without_domain: self.forms.values().filter(|d| d.is_none()).count(),
        }
    }
}
