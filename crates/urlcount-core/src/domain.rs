//! Top-level domain extraction.
//!
//! "Top-level domain" here means the last two dot-separated labels of a host
//! (`a.b.example.com` → `example.com`). There is no public-suffix awareness:
//! `example.co.uk` maps to `co.uk`, and a dotted IPv4 host maps to its last
//! two octets.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainKey(String);

impl DomainKey {
    /// Derives the key from a host, or `None` when the host has fewer than
    /// two labels (`localhost`, `example`, bracketed IPv6).
    pub fn from_host(host: &str) -> Option<Self> {
        let mut labels = host.rsplit('.');
        let last = labels.next()?;
        let second = labels.next()?;
        Some(Self(format!("{second}.{last}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(host: &str) -> Option<String> {
        DomainKey::from_host(host).map(DomainKey::into_string)
    }

    #[test]
    fn two_labels() {
        assert_eq!(key("example.com").as_deref(), Some("example.com"));
    }

    #[test]
    fn subdomains_fold_to_last_two_labels() {
        assert_eq!(key("sub.example.com").as_deref(), Some("example.com"));
        assert_eq!(key("a.b.example.com").as_deref(), Some("example.com"));
    }

    #[test]
    fn single_label_has_no_key() {
        assert_eq!(key("example"), None);
        assert_eq!(key("localhost"), None);
        assert_eq!(key("[::1]"), None);
        assert_eq!(key(""), None);
    }

    #[test]
    fn naive_rule_ignores_public_suffixes() {
        assert_eq!(key("shop.example.co.uk").as_deref(), Some("co.uk"));
        assert_eq!(key("192.168.1.1").as_deref(), Some("1.1"));
    }
}
