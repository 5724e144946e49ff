//! HtmlParser - the main entry point for HTML to block conversion.

use std::time::{SystemTime, UNIX_EPOCH};

use ejs_core::{Block, Document, ParserOptions};
use indexmap::IndexMap;
use scraper::{ElementRef, Html};

use crate::classes::ClassTokens;
use crate::extractors::Registry;
use crate::html::{has_content, parse_html};
use crate::{ParserError, Result};

/// Converts one HTML document into Editor.js blocks
pub struct HtmlParser {
    html: String,
    document: Html,
    options: ParserOptions,
    registry: Registry,
}

impl HtmlParser {
    /// Create a parser with default options.
    ///
    /// Fails with [`ParserError::EmptyInput`] when `html` is empty.
    pub fn new(html: &str) -> Result<Self> {
        Self::with_options(html, ParserOptions::default())
    }

    /// Create a parser with custom options
    pub fn with_options(html: &str, options: ParserOptions) -> Result<Self> {
        if html.is_empty() {
            return Err(ParserError::EmptyInput);
        }

        Ok(Self {
            html: html.to_string(),
            document: parse_html(html),
            options,
            registry: Registry::new(),
        })
    }

    /// Shorthand for [`HtmlParser::new`]
    pub fn parse(html: &str) -> Result<Self> {
        Self::new(html)
    }

    /// The original HTML input
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The active class prefix
    pub fn prefix(&self) -> &str {
        self.options.effective_prefix()
    }

    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        self.options.prefix = prefix.to_string();
        self
    }

    /// Document timestamp: the configured one, else the current time
    pub fn time(&self) -> i64 {
        self.options.time.unwrap_or_else(now_millis)
    }

    pub fn set_time(&mut self, time: i64) -> &mut Self {
        self.options.time = Some(time);
        self
    }

    pub fn version(&self) -> &str {
        &self.options.version
    }

    pub fn set_version(&mut self, version: &str) -> &mut Self {
        self.options.version = version.to_string();
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ParserOptions {
        &mut self.options
    }

    /// Extract every marked block in document order.
    ///
    /// Any element whose class attribute contains the prefix is inspected.
    /// Elements without a type token are skipped; an unknown type or a
    /// malformed block fails the whole conversion.
    pub fn blocks(&self) -> Result<Vec<Block>> {
        if !has_content(&self.document) {
            return Err(ParserError::NoParsableContent);
        }

        let prefix = self.prefix();
        tracing::debug!(prefix, "extracting blocks");

        let mut blocks = Vec::new();

        for element in marked_elements(&self.document, prefix) {
            let attributes: IndexMap<&str, &str> = element.value().attrs().collect();
            let tokens = ClassTokens::decode(attributes.get("class").copied(), prefix);

            let Some(block_type) = tokens.block_type.as_deref() else {
                tracing::trace!(tag = element.value().name(), "skipping element without block type");
                continue;
            };

            let extractor = self.registry.resolve(block_type)?;
            let block = extractor.extract(element, &tokens.styles, prefix)?;
            tracing::trace!(block_type = block.block_type(), styles = ?tokens.styles, "extracted block");

            blocks.push(block);
        }

        tracing::debug!(count = blocks.len(), "extracted blocks");
        Ok(blocks)
    }

    /// Assemble the output document
    pub fn to_document(&self) -> Result<Document> {
        let blocks = self.blocks()?;
        Ok(Document::new(self.time(), blocks, self.version()))
    }

    /// Convert to Editor.js JSON
    pub fn to_blocks(&self) -> Result<String> {
        Ok(self.to_document()?.to_json()?)
    }
}

/// Elements whose class attribute contains `prefix`, in document order
fn marked_elements<'a>(document: &'a Html, prefix: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |element| {
            element
                .value()
                .attr("class")
                .is_some_and(|class| class.contains(prefix))
        })
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}
