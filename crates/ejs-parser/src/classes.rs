//! Class-token decoding.
//!
//! A marked element carries at most one block type token (`<prefix>-<type>`)
//! and any number of style tokens (`<prefix>_<style>`).

/// Decoded class attribute of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTokens {
    /// Block type name, from the first `<prefix>-<type>` token
    pub block_type: Option<String>,

    /// Style names with the `<prefix>_` segment stripped, in class order
    pub styles: Vec<String>,
}

impl ClassTokens {
    /// Decode a class attribute value against a prefix.
    ///
    /// Only the first type token counts; later ones are ignored. The type name
    /// is the segment right after the first `-` of the token, so multi-segment
    /// names are truncated (`ejs-foo-bar` decodes to `foo`).
    pub fn decode(class: Option<&str>, prefix: &str) -> Self {
        let tokens: Vec<&str> = class.map(|c| c.split_whitespace().collect()).unwrap_or_default();

        let type_marker = format!("{}-", prefix);
        let style_marker = format!("{}_", prefix);

        let block_type = tokens
            .iter()
            .find(|token| token.starts_with(&type_marker))
            .and_then(|token| token.split('-').nth(1))
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let styles = tokens
            .iter()
            .filter(|token| token.starts_with(&style_marker))
            .filter_map(|token| token.split_once('_'))
            .map(|(_, style)| style.trim_start_matches('_').to_string())
            .collect();

        Self { block_type, styles }
    }
}
