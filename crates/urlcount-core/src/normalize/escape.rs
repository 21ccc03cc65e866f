//! Percent-escape validation.
//!
//! The WHATWG parser passes malformed escapes such as `%zz` through
//! untouched. Those inputs are rejected here instead. The query is skipped
//! because normalization drops it anyway.

/// Returns the byte offset of the first `%` outside the query that is not
/// followed by two hex digits.
pub fn find_invalid_escape(input: &str) -> Option<usize> {
    let fragment_start = input.find('#');
    let before_fragment = &input[..fragment_start.unwrap_or(input.len())];
    let head_end = before_fragment.find('?').unwrap_or(before_fragment.len());

    if let Some(offset) = first_bad_escape(&input[..head_end]) {
        return Some(offset);
    }
    let start = fragment_start? + 1;
    first_bad_escape(&input[start..]).map(|offset| start + offset)
}

fn first_bad_escape(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        if b != b'%' {
            return None;
        }
        let valid = matches!(
            (bytes.get(i + 1), bytes.get(i + 2)),
            (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
        );
        (!valid).then_some(i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_escapes_pass() {
        assert_eq!(find_invalid_escape("https://example.com/a%20b%2F"), None);
        assert_eq!(find_invalid_escape("https://example.com/%e2%82%AC"), None);
        assert_eq!(find_invalid_escape("https://example.com"), None);
    }

    #[test]
    fn malformed_escapes_are_located() {
        assert_eq!(find_invalid_escape("https://example.com/%zz"), Some(20));
        assert_eq!(find_invalid_escape("https://example.com/a%"), Some(21));
        assert_eq!(find_invalid_escape("https://example.com/%g1"), Some(20));
        assert_eq!(find_invalid_escape("https://example.com/%4"), Some(20));
        assert_eq!(find_invalid_escape("https://ex%ample.com/"), Some(10));
    }

    #[test]
    fn query_is_not_checked() {
        assert_eq!(find_invalid_escape("https://example.com/?q=%zz"), None);
        assert_eq!(find_invalid_escape("https://example.com/?q=%zz#ok"), None);
    }

    #[test]
    fn fragment_is_checked() {
        assert_eq!(find_invalid_escape("https://example.com/#%zz"), Some(21));
        assert_eq!(find_invalid_escape("https://example.com/?q=1#a%"), Some(26));
    }

    #[test]
    fn question_mark_inside_fragment_does_not_start_a_query() {
        assert_eq!(find_invalid_escape("https://example.com/#x?%zz"), Some(23));
    }
}
