//! URL normalization.
//!
//! Rewrites a URL string into a canonical form so that syntactically
//! different spellings of the same resource compare equal:
//! - query and fragment are dropped (an empty `?` included)
//! - the path is optionally cleaned filesystem-style (see [`PathMode`])
//! - scheme, host, port and path are kept
//!
//! Parsing is done by the `url` crate, which lowercases the scheme and the
//! host of special schemes (`http`, `https`, `ftp`, ...) and elides default
//! ports, so `HTTPS://Example.com:443` and `https://example.com` are the same
//! canonical URL.

mod error;
mod escape;
mod path;

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub use error::{NormalizeError, ParseCause};
pub use path::clean_path;

/// How the path is treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// Filesystem-style cleaning via [`clean_path`]: `/a/`, `/a//` and `/a/.`
    /// are all `/a`.
    #[default]
    Clean,
    /// Path exactly as the parser produced it: `/a` and `/a/` differ.
    Raw,
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMode::Clean => write!(f, "clean"),
            PathMode::Raw => write!(f, "raw"),
        }
    }
}

/// A normalized URL. Two inputs are equivalent iff their canonical URLs are
/// byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl {
    serialized: String,
    host: Option<String>,
}

impl CanonicalUrl {
    fn from_url(url: Url) -> Self {
        let host = url.host_str().map(str::to_string);
        Self {
            serialized: url.into(),
            host,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Host as serialized by the parser (IPv6 hosts keep their brackets).
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn into_string(self) -> String {
        self.serialized
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        &self.serialized
    }
}

/// Normalizes one URL string.
///
/// Returns [`NormalizeError::Unparseable`] when the parser rejects the input
/// (e.g. `"invalidurl"`, which has no scheme) or when a `%` outside the query
/// is not followed by two hex digits. Opaque URLs such as
/// `mailto:` have no hierarchical path and are never cleaned.
///
/// # Examples
///
/// - `normalize_url("https://example.com?b=2&a=1", PathMode::Clean)` → `"https://example.com/"`
/// - `normalize_url("https://example.com/a/../b/", PathMode::Clean)` → `"https://example.com/b"`
/// - `normalize_url("https://example.com/b/", PathMode::Raw)` → `"https://example.com/b/"`
pub fn normalize_url(input: &str, mode: PathMode) -> Result<CanonicalUrl, NormalizeError> {
    if let Some(offset) = escape::find_invalid_escape(input) {
        return Err(NormalizeError::unparseable(
            input,
            ParseCause::InvalidEscape { offset },
        ));
    }
    let mut url = Url::parse(input).map_err(|e| NormalizeError::unparseable(input, e))?;

    url.set_query(None);
    url.set_fragment(None);

    if mode == PathMode::Clean && !url.cannot_be_a_base() {
        let cleaned = clean_path(url.path());
        if cleaned != url.path() {
            url.set_path(&cleaned);
            // set_path keeps a `/.` path marker on hostless URLs; parsing the
            // serialization again drops it.
            url = Url::parse(url.as_str()).map_err(|e| NormalizeError::unparseable(input, e))?;
        }
    }

    Ok(CanonicalUrl::from_url(url))
}
