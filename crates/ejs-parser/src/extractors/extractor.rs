//! Extractor type binding a block type to its extraction function.

use ejs_core::Block;
use scraper::ElementRef;

use super::BlockType;
use crate::Result;

/// Extraction function: marked element, its style tokens and the active prefix
pub type ExtractFn = fn(ElementRef<'_>, &[String], &str) -> Result<Block>;

/// Turns a marked element into a block of one type
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    /// Block type this extractor produces
    pub block_type: BlockType,
    extract: ExtractFn,
}

impl Extractor {
    /// Create a new extractor
    pub fn new(block_type: BlockType, extract: ExtractFn) -> Self {
        Self { block_type, extract }
    }

    /// Run the extraction
    pub fn extract(&self, element: ElementRef<'_>, styles: &[String], prefix: &str) -> Result<Block> {
        (self.extract)(element, styles, prefix)
    }
}
