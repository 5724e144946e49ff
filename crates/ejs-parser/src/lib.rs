//! # ejs-parser
//!
//! Convert class-annotated HTML into Editor.js blocks.
//!
//! HTML exported from Editor.js (or written by hand following the same
//! convention) marks every block element with a `<prefix>-<type>` class and
//! attaches tunes with `<prefix>_<style>` classes:
//!
//! ```html
//! <h2 class="ejs-header ejs_center">Title</h2>
//! <p class="ejs-paragraph">Hello <b>world</b></p>
//! ```
//!
//! The parser walks the document in order, decodes those classes and hands each
//! marked element to the extractor registered for its type.
//!
//! ## Example
//!
//! ```rust
//! use ejs_parser::HtmlParser;
//!
//! let mut parser = HtmlParser::new(r#"<p class="ejs-paragraph">Hello <b>world</b></p>"#).unwrap();
//! parser.set_time(1700000000000);
//!
//! let json = parser.to_blocks().unwrap();
//! assert!(json.contains(r#""text": "Hello <b>world</b>""#));
//! ```

pub mod classes;
mod extractors;
pub mod html;
pub mod render;
mod service;
pub mod styles;

pub use classes::ClassTokens;
pub use ejs_core::{Block, Document, ParserOptions};
pub use extractors::{BlockType, ExtractFn, Extractor, Registry};
pub use html::parse_html;
pub use service::HtmlParser;

/// Error type for block extraction
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Empty HTML input")]
    EmptyInput,

    #[error("No HTML to parse")]
    NoParsableContent,

    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("Malformed {block_type} block: missing {missing}")]
    MalformedBlock {
        block_type: &'static str,
        missing: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ParserError {
    pub(crate) fn malformed(block_type: &'static str, missing: impl Into<String>) -> Self {
        ParserError::MalformedBlock {
            block_type,
            missing: missing.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
