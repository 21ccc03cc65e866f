//! Reading URL lists.
//!
//! One URL per line. Surrounding whitespace is trimmed; blank lines and lines
//! starting with `#` are ignored. Anything else is passed through untouched,
//! including text that will not parse as a URL.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Built-in list used when no input is given.
pub const SAMPLE_URLS: &[&str] = &[
    "https://example.com",
    "https://example.com/",
    "http://example.com",
    "https://example.com?a=1&b=2",
    "https://example.com?b=2&a=1",
    "https://subdomain.example.com",
    "https://subdomain.example.com/",
    "https://subdomain.example.com?a=1&b=2",
    "https://subdomain.example.com?b=2&a=1",
    "https://example.org",
    "https://example.net",
];

pub fn read_urls<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}

pub fn read_urls_from_path(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_urls(BufReader::new(f)).with_context(|| format!("read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "https://example.com\n\n  # comment\n  http://example.org/a  \ninvalidurl\n";
        let urls = read_urls(Cursor::new(text)).unwrap();
        assert_eq!(urls, vec!["https://example.com", "http://example.org/a", "invalidurl"]);
    }

    #[test]
    fn handles_crlf() {
        let urls = read_urls(Cursor::new("https://a.example.com\r\nhttps://b.example.com\r\n")).unwrap();
        assert_eq!(urls, vec!["https://a.example.com", "https://b.example.com"]);
    }

    #[test]
    fn reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "https://example.com").unwrap();
        writeln!(f, "https://example.com/").unwrap();
        f.flush().unwrap();
        let urls = read_urls_from_path(f.path()).unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_urls_from_path(Path::new("/nonexistent/urls.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/urls.txt"));
    }
}
