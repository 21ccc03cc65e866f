//! Error type for URL normalization.

use thiserror::Error;

/// The only way normalization can fail: the input is not a parseable URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("unparseable URL {input:?}: {source}")]
    Unparseable {
        input: String,
        #[source]
        source: ParseCause,
    },
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCause {
    /// Rejected by the WHATWG parser.
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// A `%` not followed by two hex digits.
    #[error("invalid percent-escape at byte {offset}")]
    InvalidEscape { offset: usize },
}

impl NormalizeError {
    pub(crate) fn unparseable(input: &str, cause: impl Into<ParseCause>) -> Self {
        NormalizeError::Unparseable {
            input: input.to_string(),
            source: cause.into(),
        }
    }

    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            NormalizeError::Unparseable { input, .. } => input,
        }
    }

    pub fn cause(&self) -> ParseCause {
        match self {
            NormalizeError::Unparseable { source, .. } => *source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_input_and_cause() {
        let err = NormalizeError::unparseable("invalidurl", url::ParseError::RelativeUrlWithoutBase);
        let msg = err.to_string();
        assert!(msg.contains("\"invalidurl\""), "{msg}");
        assert!(msg.contains("relative URL without a base"), "{msg}");
        assert_eq!(err.input(), "invalidurl");
    }

    #[test]
    fn display_invalid_escape() {
        let err = NormalizeError::unparseable(
            "https://example.com/%zz",
            ParseCause::InvalidEscape { offset: 20 },
        );
        assert!(err.to_string().contains("invalid percent-escape at byte 20"));
        assert_eq!(err.cause(), ParseCause::InvalidEscape { offset: 20 });
    }

    #[test]
    fn source_is_parse_cause() {
        use std::error::Error as _;
        let err = NormalizeError::unparseable("http://[::1", url::ParseError::InvalidIpv6Address);
        assert!(err.source().is_some());
        assert_eq!(err.cause(), ParseCause::Url(url::ParseError::InvalidIpv6Address));
    }
}
