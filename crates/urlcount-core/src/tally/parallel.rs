//! Partitioned tallying on scoped threads.
//!
//! The input is split into `jobs` contiguous chunks, each chunk is tallied on
//! its own thread, and the partial tallies are merged. Because merging unions
//! canonical URLs before any per-domain counting, the result is identical to
//! a sequential tally of the whole input.

use anyhow::{anyhow, Result};
use std::thread;

use super::UrlTally;
use crate::normalize::PathMode;

/// Tallies `urls` across up to `jobs` threads. `jobs` of 0 or 1, or inputs
/// too small to split, run on the calling thread.
pub fn tally_partitioned<S>(urls: &[S], mode: PathMode, jobs: usize) -> Result<UrlTally>
where
    S: AsRef<str> + Sync,
{
    let jobs = jobs.max(1).min(urls.len().max(1));
    if jobs == 1 {
        let mut tally = UrlTally::new(mode);
        tally.extend(urls);
        return Ok(tally);
    }

    let chunk_len = urls.len().div_ceil(jobs);
    tracing::debug!(jobs, chunk_len, total = urls.len(), "tallying in partitions");

    let partials: Vec<UrlTally> = thread::scope(|scope| {
        let handles: Vec<_> = urls
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut tally = UrlTally::new(mode);
                    tally.extend(chunk);
                    tally
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| anyhow!("tally worker panicked")))
            .collect::<Result<Vec<_>>>()
    })?;

    let mut merged = UrlTally::new(mode);
    for partial in partials {
        merged.merge(partial)?;
    }
    Ok(merged)
}
