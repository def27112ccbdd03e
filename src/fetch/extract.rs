//! HTML content extraction and normalization

use scraper::{Html, Selector};

/// Maximum length of extracted page text, in characters
const MAX_CONTENT_LENGTH: usize = 8000;

/// Marker appended when content is cut at the cap
const TRUNCATION_MARKER: &str = "... [content truncated]";

/// Elements that never contribute to readable page text
const NOISE_SELECTOR: &str = "script, style, nav, header, footer";

/// Extracts readable text from an HTML document
///
/// Script, style, and page-chrome subtrees are detached before extraction,
/// whitespace runs collapse to single spaces, and text longer than 8000
/// characters is cut there with the truncation marker appended.
pub fn extract_text(html: &str) -> String {
    let mut document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse(NOISE_SELECTOR) {
        let noise: Vec<_> = document.select(&selector).map(|element| element.id()).collect();
        for id in noise {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }

    let raw = document.root_element().text().collect::<Vec<_>>().join(" ");
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    truncate(text)
}

/// Caps text at the content ceiling, appending the marker when cut
fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_CONTENT_LENGTH {
        return text;
    }

    let mut truncated: String = text.chars().take(MAX_CONTENT_LENGTH).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let html = "<html><body><p>Hello world</p></body></html>";
        assert_eq!(extract_text(html), "Hello world");
    }

    #[test]
    fn test_script_and_style_are_stripped() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><script>var x = 1;</script><p>Visible</p></body></html>"#;
        let text = extract_text(html);

        assert_eq!(text, "Visible");
        assert!(!text.contains("color"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn test_page_chrome_is_stripped() {
        let html = r#"<html><body>
            <header>Site header</header>
            <nav>Home | About</nav>
            <p>Article body</p>
            <footer>Copyright</footer>
        </body></html>"#;
        let text = extract_text(html);

        assert_eq!(text, "Article body");
    }

    #[test]
    fn test_nested_noise_inside_chrome() {
        let html = r#"<html><body>
            <header><script>tracker();</script>Header</header>
            <p>Kept</p>
        </body></html>"#;
        let text = extract_text(html);

        assert_eq!(text, "Kept");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let html = "<html><body><p>one\n\n  two\t\tthree</p>\n<p>four</p></body></html>";
        assert_eq!(extract_text(html), "one two three four");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        let html = "<html><body>  <p>  padded  </p>  </body></html>";
        assert_eq!(extract_text(html), "padded");
    }

    #[test]
    fn test_long_content_truncated_with_marker() {
        let word = "word ";
        let body: String = word.repeat(2000); // 10000 characters of text
        let html = format!("<html><body><p>{body}</p></body></html>");
        let text = extract_text(&html);

        assert!(text.ends_with(TRUNCATION_MARKER));
        let content_len = text.len() - TRUNCATION_MARKER.len();
        assert_eq!(content_len, MAX_CONTENT_LENGTH);
    }

    #[test]
    fn test_content_at_cap_is_not_truncated() {
        let body = "a".repeat(MAX_CONTENT_LENGTH);
        let html = format!("<html><body>{body}</body></html>");
        let text = extract_text(&html);

        assert_eq!(text.len(), MAX_CONTENT_LENGTH);
        assert!(!text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let body = "ü".repeat(MAX_CONTENT_LENGTH + 100);
        let html = format!("<html><body>{body}</body></html>");
        let text = extract_text(&html);

        assert!(text.ends_with(TRUNCATION_MARKER));
        let content: String = text.chars().take(MAX_CONTENT_LENGTH).collect();
        assert_eq!(content.chars().count(), MAX_CONTENT_LENGTH);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_text(""), "");
    }
}
