//! HTML parsing support.
//!
//! Input is pre-encoded so that non-ASCII text survives lenient parsing, then
//! handed to html5ever (via scraper), which recovers from malformed markup
//! instead of failing.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node};

/// Elements html5ever synthesizes around any input
const SCAFFOLDING: &[&str] = &["html", "head", "body"];

/// Start of a span the parser never decodes references in
static VERBATIM_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<!--|<(script|style)[\s/>]").expect("static regex must compile")
});

/// Parse an HTML string into a document tree.
///
/// Parse errors are collected by the parser and logged, never raised.
///
/// # Example
///
/// ```rust
/// use ejs_parser::parse_html;
///
/// let document = parse_html("<p class=\"ejs-paragraph\">Héllo</p>");
/// assert_eq!(document.root_element().text().collect::<String>(), "Héllo");
/// ```
pub fn parse_html(html: &str) -> Html {
    let document = Html::parse_document(&encode_non_ascii(html));

    if !document.errors.is_empty() {
        tracing::debug!(count = document.errors.len(), "recovered from malformed HTML");
        for error in &document.errors {
            tracing::trace!(error = %error, "html parse error");
        }
    }

    document
}

/// Replace non-ASCII characters with numeric character references.
///
/// C1 controls (U+0080 to U+009F) stay literal, since their references
/// decode to Windows-1252 characters. Comments and `script`/`style` content
/// stay literal too, since references are not decoded there.
pub fn encode_non_ascii(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(found) = VERBATIM_START.captures(rest) {
        let (start, open_end) = match found.get(0) {
            Some(m) => (m.start(), m.end()),
            None => break,
        };
        let terminator = match found.get(1) {
            Some(tag) => format!("</{}", tag.as_str().to_ascii_lowercase()),
            None => "-->".to_string(),
        };

        // ASCII lowercasing keeps byte offsets intact
        let end = rest[open_end..]
            .to_ascii_lowercase()
            .find(&terminator)
            .map(|offset| open_end + offset + terminator.len())
            .unwrap_or(rest.len());

        encode_into(&mut result, &rest[..start]);
        result.push_str(&rest[start..end]);
        rest = &rest[end..];
    }

    encode_into(&mut result, rest);
    result
}

fn encode_into(result: &mut String, text: &str) {
    for c in text.chars() {
        if c.is_ascii() || ('\u{80}'..='\u{9f}').contains(&c) {
            result.push(c);
        } else {
            result.push_str(&format!("&#{};", c as u32));
        }
    }
}

/// Check whether a parsed document holds anything beyond the implied
/// `html`/`head`/`body` elements
pub fn has_content(document: &Html) -> bool {
    document.tree.root().descendants().any(|node| match node.value() {
        Node::Element(element) => !SCAFFOLDING.contains(&element.name()),
        Node::Text(text) => !text.trim().is_empty(),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode_non_ascii("abc"), "abc");
        assert_eq!(encode_non_ascii("é"), "&#233;");
        assert_eq!(encode_non_ascii("a😀b"), "a&#128512;b");
    }

    #[test]
    fn test_c1_controls_stay_literal() {
        assert_eq!(encode_non_ascii("a\u{85}b"), "a\u{85}b");

        let document = parse_html("<p>a\u{85}b \u{80}</p>");
        let text: String = document.root_element().text().collect();
        assert_eq!(text, "a\u{85}b \u{80}");
    }

    #[test]
    fn test_comments_and_raw_text_stay_literal() {
        assert_eq!(
            encode_non_ascii("<!-- café --><SCRIPT>var s='é';</SCRIPT><p>é</p><style>a{content:'ü'}</style>"),
            "<!-- café --><SCRIPT>var s='é';</SCRIPT><p>&#233;</p><style>a{content:'ü'}</style>"
        );
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        assert_eq!(encode_non_ascii("é<!-- ü"), "&#233;<!-- ü");
    }

    #[test]
    fn test_similar_tag_names_are_encoded() {
        assert_eq!(encode_non_ascii("<scripts>é</scripts>"), "<scripts>&#233;</scripts>");
    }

    #[test]
    fn test_non_ascii_survives_parse() {
        let document = parse_html("<p>Zoë – ünïcode</p>");
        let text: String = document.root_element().text().collect();
        assert_eq!(text, "Zoë – ünïcode");
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        let document = parse_html("<div><p>unclosed <b>bold</div>");
        assert!(has_content(&document));
    }

    #[test]
    fn test_has_content() {
        assert!(has_content(&parse_html("<p>x</p>")));
        assert!(has_content(&parse_html("plain text")));
        assert!(has_content(&parse_html("<hr>")));
        assert!(!has_content(&parse_html("   ")));
        assert!(!has_content(&parse_html("<html><body></body></html>")));
    }
}
