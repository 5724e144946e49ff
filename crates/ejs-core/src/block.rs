//! Editor.js block model
//!
//! This module defines one record shape per supported block type. The shapes
//! are unioned into [`Block`], which serializes as `{"type": ..., "data": ...}`.

use serde::{Deserialize, Serialize};

/// A single typed content unit of an Editor.js document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Block {
    Header(HeaderData),
    Paragraph(ParagraphData),
    List(ListData),
    Raw(RawData),
    LinkTool(LinkToolData),
    Delimiter(DelimiterData),
    Alert(AlertData),
    Table(TableData),
    Code(CodeData),
    Quote(QuoteData),
    Video(VideoData),
    Embed(EmbedData),
    Image(ImageData),
    Warning(WarningData),
}

impl Block {
    /// The Editor.js type name of this block (the `type` key in JSON)
    pub fn block_type(&self) -> &'static str {
        match self {
            Block::Header(_) => "header",
            Block::Paragraph(_) => "paragraph",
            Block::List(_) => "list",
            Block::Raw(_) => "raw",
            Block::LinkTool(_) => "linkTool",
            Block::Delimiter(_) => "delimiter",
            Block::Alert(_) => "alert",
            Block::Table(_) => "table",
            Block::Code(_) => "code",
            Block::Quote(_) => "quote",
            Block::Video(_) => "video",
            Block::Embed(_) => "embed",
            Block::Image(_) => "image",
            Block::Warning(_) => "warning",
        }
    }
}

/// Text alignment tune
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Contextual color of an alert block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[default]
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Danger,
    Light,
    Dark,
}

/// List ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    pub text: String,
    /// Heading level (1-6)
    pub level: u8,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphData {
    pub text: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    pub style: ListStyle,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkToolData {
    pub link: String,
    pub meta: LinkMeta,
}

/// Preview metadata of a link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkMeta {
    pub site_name: String,
    pub image: LinkImage,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkImage {
    pub url: String,
}

/// Delimiters carry no data; serializes as `{}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelimiterData {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertData {
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub align: Alignment,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
    pub with_headings: bool,
    /// Rows of cell text, heading row first when present
    pub content: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeData {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    pub text: String,
    pub caption: String,
    pub alignment: Alignment,
}

/// `url` holds the rendered inner content of the marked element, which is
/// not necessarily a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoData {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedData {
    /// Provider name, empty when unknown
    pub service: String,
    pub source: String,
    pub embed: String,
    pub width: String,
    pub height: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub url: String,
    pub caption: String,
    pub with_border: bool,
    pub with_background: bool,
    pub stretched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningData {
    pub title: String,
    pub message: String,
}
