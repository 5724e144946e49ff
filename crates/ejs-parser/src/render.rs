//! Rendering of element content back to strings.
//!
//! Rich-text payloads keep the inline markup the editor produced, so children
//! are serialized back to HTML rather than flattened to text.

use scraper::{ElementRef, Node, Selector};

/// Elements whose text children are written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Render the inner content of an element.
///
/// Child nodes are serialized in document order with their own markup. An
/// element without children renders as its text content, which is empty.
///
/// # Example
///
/// ```rust
/// use ejs_parser::{parse_html, render::inner_content};
/// use scraper::Selector;
///
/// let document = parse_html("<p>Hello <b>world</b></p>");
/// let selector = Selector::parse("p").unwrap();
/// let p = document.select(&selector).next().unwrap();
/// assert_eq!(inner_content(p), "Hello <b>world</b>");
/// ```
pub fn inner_content(element: ElementRef) -> String {
    if !element.has_children() {
        return text_content(element);
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.value().name());
    let mut result = String::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if raw_text {
                    result.push_str(&text.text);
                } else {
                    result.push_str(&escape_text(&text.text));
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    result.push_str(&child_element.html());
                }
            }
            Node::Comment(comment) => {
                result.push_str("<!--");
                result.push_str(&comment.comment);
                result.push_str("-->");
            }
            _ => {}
        }
    }

    result
}

/// Concatenated text of an element and its descendants
pub fn text_content(element: ElementRef) -> String {
    element.text().collect()
}

/// First descendant matching a selector, in document order
pub fn first_descendant<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// Element children, skipping text and comments
pub fn element_children<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Escape text for HTML output
fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_html;
    use scraper::Html;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_nested_markup_is_kept() {
        let document = parse_html(r#"<p>Go <a href="https://example.com/x">there</a> <i>now</i></p>"#);
        assert_eq!(
            inner_content(first(&document, "p")),
            r#"Go <a href="https://example.com/x">there</a> <i>now</i>"#
        );
    }

    #[test]
    fn test_empty_element() {
        let document = parse_html("<div><span></span></div>");
        assert_eq!(inner_content(first(&document, "span")), "");
    }

    #[test]
    fn test_text_is_escaped() {
        let document = parse_html("<p>a &amp; b &lt;c&gt;</p>");
        assert_eq!(inner_content(first(&document, "p")), "a &amp; b &lt;c&gt;");
        assert_eq!(text_content(first(&document, "p")), "a & b <c>");
    }

    #[test]
    fn test_non_ascii_is_literal() {
        let document = parse_html("<p>Crème <b>brûlée</b></p>");
        assert_eq!(inner_content(first(&document, "p")), "Crème <b>brûlée</b>");
    }

    #[test]
    fn test_comments_are_kept() {
        let document = parse_html("<div>a<!-- note -->b</div>");
        assert_eq!(inner_content(first(&document, "div")), "a<!-- note -->b");
    }

    #[test]
    fn test_void_children() {
        let document = parse_html(r#"<div>line<br><img src="a.png"></div>"#);
        assert_eq!(inner_content(first(&document, "div")), r#"line<br><img src="a.png">"#);
    }

    #[test]
    fn test_first_descendant_skips_self() {
        let document = parse_html("<div id=\"outer\"><div id=\"inner\"></div></div>");
        let outer = first(&document, "#outer");
        let selector = Selector::parse("div").unwrap();
        let found = first_descendant(outer, &selector).unwrap();
        assert_eq!(found.value().attr("id"), Some("inner"));
    }

    #[test]
    fn test_element_children() {
        let document = parse_html("<ul> <li>One</li> text <li>Two</li></ul>");
        let names: Vec<String> = element_children(first(&document, "ul"))
            .map(text_content)
            .collect();
        assert_eq!(names, vec!["One", "Two"]);
    }
}
