//! ejs-core - Editor.js block model and document assembly
//!
//! This crate provides the typed block records produced by `ejs-parser`, the
//! options that drive extraction, and the JSON form of the final document.
//!
//! # Example
//!
//! ```rust
//! use ejs_core::{Alignment, Block, Document, ParagraphData};
//!
//! let doc = Document::new(
//!     1700000000000,
//!     vec![Block::Paragraph(ParagraphData {
//!         text: "Hello <b>world</b>".to_string(),
//!         alignment: Alignment::Left,
//!     })],
//!     "2.19.0",
//! );
//!
//! let json = doc.to_json().unwrap();
//! assert!(json.contains("\"type\": \"paragraph\""));
//! ```

mod block;
mod document;
mod options;

pub use block::{
    AlertData, AlertType, Alignment, Block, CodeData, DelimiterData, EmbedData, HeaderData,
    ImageData, LinkImage, LinkMeta, LinkToolData, ListData, ListStyle, ParagraphData, QuoteData,
    RawData, TableData, VideoData, WarningData,
};
pub use document::{to_json, Document};
pub use options::{ParserOptions, DEFAULT_PREFIX, DEFAULT_VERSION};
