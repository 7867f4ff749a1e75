use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<a\s+href="([^"]*)"[^>]*>([^<]*)</a>"#).unwrap());

/// A bookmark as extracted from the export, before classification.
#[derive(Debug, Clone)]
pub struct RawBookmark {
    pub url: String,
    pub title: String,
    pub domain: String,
}

/// Walk the bookmarks HTML and yield anchors in document order.
///
/// The element/attribute markers match case-insensitively (browser exports
/// use `<A HREF=...>`, hand-written files often don't); anchors with an
/// empty href or whitespace-only text are dropped silently.
pub fn parse_bookmarks(html: &str) -> impl Iterator<Item = RawBookmark> + '_ {
    ANCHOR_RE.captures_iter(html).filter_map(|caps| {
        let url = decode_entities(&caps[1]);
        let title = decode_entities(caps[2].trim());
        if url.is_empty() || title.is_empty() {
            return None;
        }
        let domain = domain_of(&url);
        Some(RawBookmark { url, title, domain })
    })
}

/// Decode common HTML entities in exported bookmark text.
/// `&amp;` goes last so `&amp;lt;` comes out as the literal `&lt;`.
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Network location of the bookmark URL. Anything unparsable, or a scheme
/// with no host part (`mailto:`, `file:`), maps to "unknown" rather than
/// an error.
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_anchor() {
        let html = r#"<A HREF="https://golang.org/doc">Go Docs</A>"#;
        let bms: Vec<_> = parse_bookmarks(html).collect();
        assert_eq!(bms.len(), 1);
        assert_eq!(bms[0].url, "https://golang.org/doc");
        assert_eq!(bms[0].title, "Go Docs");
        assert_eq!(bms[0].domain, "golang.org");
    }

    #[test]
    fn lowercase_markers() {
        let html = r#"<a href="https://example.com">Example</a>"#;
        let bms: Vec<_> = parse_bookmarks(html).collect();
        assert_eq!(bms.len(), 1);
        assert_eq!(bms[0].domain, "example.com");
    }

    #[test]
    fn extra_attributes() {
        let html = r#"<A HREF="https://example.com" ADD_DATE="1695465600" ICON="data:x">Example</A>"#;
        let bms: Vec<_> = parse_bookmarks(html).collect();
        assert_eq!(bms.len(), 1);
        assert_eq!(bms[0].url, "https://example.com");
    }

    #[test]
    fn empty_href_skipped() {
        let html = r#"<A HREF="">No address</A>"#;
        assert_eq!(parse_bookmarks(html).count(), 0);
    }

    #[test]
    fn whitespace_title_skipped() {
        let html = r#"<A HREF="https://example.com">   </A>"#;
        assert_eq!(parse_bookmarks(html).count(), 0);
    }

    #[test]
    fn entities_decoded() {
        let html = r#"<A HREF="https://example.com/?a=1&amp;b=2">Tom &amp; Jerry</A>"#;
        let bms: Vec<_> = parse_bookmarks(html).collect();
        assert_eq!(bms[0].url, "https://example.com/?a=1&b=2");
        assert_eq!(bms[0].title, "Tom & Jerry");
    }

    #[test]
    fn unparsable_url_gets_unknown_domain() {
        let html = r#"<A HREF="not a url">Something</A>"#;
        let bms: Vec<_> = parse_bookmarks(html).collect();
        assert_eq!(bms[0].domain, "unknown");
        assert_eq!(bms[0].url, "not a url");
    }

    #[test]
    fn hostless_scheme_gets_unknown_domain() {
        let html = r#"<A HREF="mailto:someone@example.com">Mail</A>"#;
        let bms: Vec<_> = parse_bookmarks(html).collect();
        assert_eq!(bms[0].domain, "unknown");
    }

    #[test]
    fn document_order_preserved() {
        let html = concat!(
            r#"<DT><A HREF="https://a.example">First</A>"#,
            "\n",
            r#"<DT><A HREF="https://b.example">Second</A>"#,
        );
        let titles: Vec<_> = parse_bookmarks(html).map(|b| b.title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn bookmarks_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/bookmarks.html").unwrap();
        let bms: Vec<_> = parse_bookmarks(&html).collect();
        assert!(bms.len() >= 10, "Expected 10+ bookmarks, got {}", bms.len());
        assert!(bms.iter().all(|b| !b.url.is_empty() && !b.title.is_empty()));
        assert!(bms.iter().any(|b| b.title == "Tom & Jerry cartoons"));
    }
}
