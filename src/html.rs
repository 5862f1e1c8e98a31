//! DOM-based extractors: hyperlinks, author metadata, geo-position metadata.
//!
//! All three parse the fetched document independently and read one thing
//! each. Links keep a `None` entry for anchors without an `href` attribute
//! so the output mirrors the document structure; only the first author meta
//! tag is consulted.

use scraper::{Html, Selector};

/// Every anchor's `href` value in document order, `None` for bare anchors.
pub fn extract_links(body: &str) -> Vec<Option<String>> {
    let document = Html::parse_document(body);
    let anchors = Selector::parse("a").expect("anchor selector is valid");

    document
        .select(&anchors)
        .map(|tag| tag.value().attr("href").map(str::to_string))
        .collect()
}

/// Content of the first `<meta name="author">` tag, if any.
pub fn extract_author(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let author = Selector::parse(r#"meta[name="author"]"#).expect("author selector is valid");

    document
        .select(&author)
        .next()
        .and_then(|tag| tag.value().attr("content").map(str::to_string))
}

/// Trimmed text content of every `<meta name="geo.position">` tag in
/// document order.
pub fn extract_locations(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let geo = Selector::parse(r#"meta[name="geo.position"]"#).expect("geo selector is valid");

    document
        .select(&geo)
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<html><head>
        <meta name="author" content="Jane Doe">
        <meta name="author" content="Second Author">
        <meta name="geo.position" content="48.85;2.35">
        </head><body>
        <a href="/about">About</a>
        <a>bare anchor</a>
        <a href="https://example.org/contact">Contact</a>
        </body></html>"#;

    #[test]
    fn links_in_document_order_with_nulls() {
        let links = extract_links(FIXTURE);
        assert_eq!(
            links,
            vec![
                Some("/about".to_string()),
                None,
                Some("https://example.org/contact".to_string()),
            ]
        );
    }

    #[test]
    fn first_author_only() {
        assert_eq!(extract_author(FIXTURE).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn author_absent() {
        assert_eq!(extract_author("<html><body><p>hi</p></body></html>"), None);
    }

    #[test]
    fn author_tag_without_content_attribute() {
        let body = r#"<html><head><meta name="author"></head></html>"#;
        assert_eq!(extract_author(body), None);
    }

    #[test]
    fn geo_meta_text_is_collected_per_tag() {
        // Meta tags are void elements; their text content is empty, and one
        // entry is still emitted per tag.
        let locations = extract_locations(FIXTURE);
        assert_eq!(locations, vec![String::new()]);
    }

    #[test]
    fn no_geo_tags_means_empty() {
        assert!(extract_locations("<html><body></body></html>").is_empty());
    }

    #[test]
    fn malformed_html_still_yields_links() {
        let body = "<a href='/x'>unclosed <a href='/y'";
        let links = extract_links(body);
        assert!(links.contains(&Some("/x".to_string())));
    }
}
