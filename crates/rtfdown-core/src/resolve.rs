//! Link destination resolution.

use url::Url;

/// Resolve a possibly-relative destination against an optional base URL.
///
/// Destinations that already carry a scheme separator (`://`) pass through
/// unchanged. Relative destinations are resolved per the URL standard when
/// a base is available. Total function: an absent or unparseable base means
/// the destination is returned as-is, never an error.
pub fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    if href.contains("://") {
        return href.to_string();
    }

    let Some(base) = base_url else {
        return href.to_string();
    };

    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_relative_against_base() {
        assert_eq!(
            resolve_url("img/a.png", Some("http://example.com/repo/")),
            "http://example.com/repo/img/a.png"
        );
    }

    #[test]
    fn test_parent_segments() {
        assert_eq!(
            resolve_url("../a.png", Some("http://example.com/repo/docs/")),
            "http://example.com/repo/a.png"
        );
    }

    #[test]
    fn test_absolute_passes_through() {
        assert_eq!(
            resolve_url("http://other.com/a.png", Some("http://example.com/repo/")),
            "http://other.com/a.png"
        );
    }

    #[test]
    fn test_no_base() {
        assert_eq!(resolve_url("img/a.png", None), "img/a.png");
        assert_eq!(resolve_url("", None), "");
    }

    #[test]
    fn test_unparseable_base() {
        assert_eq!(resolve_url("a.png", Some("not a url")), "a.png");
    }
}
