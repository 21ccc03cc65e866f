//! Filesystem-style cleaning of URL paths.

/// Cleans a URL path the way a POSIX `path.Clean` treats a rooted path:
///
/// - Collapses repeated `/`
/// - Drops `.` segments
/// - Resolves `..` against the previous segment (`..` at the root is dropped)
/// - Drops a trailing `/`
///
/// The result is always rooted, so `""` and `"/"` both clean to `"/"`.
/// Segments are compared byte-for-byte; percent-encoded dots are left to the
/// URL parser, which already resolves them.
pub fn clean_path(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }

    let mut out = String::with_capacity(path.len().max(1));
    if stack.is_empty() {
        out.push('/');
        return out;
    }
    for segment in stack {
        out.push('/');
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_empty() {
        assert_eq!(clean_path(""), "/");
        assert_eq!(clean_path("/"), "/");
        assert_eq!(clean_path("//"), "/");
    }

    #[test]
    fn trailing_slash_dropped() {
        assert_eq!(clean_path("/page1/"), "/page1");
        assert_eq!(clean_path("/a/b///"), "/a/b");
    }

    #[test]
    fn repeated_separators() {
        assert_eq!(clean_path("/a//b/c"), "/a/b/c");
    }

    #[test]
    fn dot_segments() {
        assert_eq!(clean_path("/a/./b/../c"), "/a/c");
        assert_eq!(clean_path("/../././"), "/");
        assert_eq!(clean_path("/a/.."), "/");
        assert_eq!(clean_path("/.."), "/");
    }

    #[test]
    fn unrooted_input_becomes_rooted() {
        assert_eq!(clean_path("a/b"), "/a/b");
    }

    #[test]
    fn idempotent() {
        for p in ["", "/", "/a//b/../c/", "/x/./y", "/%2F/z"] {
            let once = clean_path(p);
            assert_eq!(clean_path(&once), once, "not idempotent for {p:?}");
        }
    }
}
