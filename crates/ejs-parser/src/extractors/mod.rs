//! Block type registry.

mod extractor;
mod standard;

pub use extractor::{ExtractFn, Extractor};
pub use standard::standard_extractors;

use indexmap::IndexMap;

use crate::{ParserError, Result};

/// The closed set of supported block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Header,
    Paragraph,
    List,
    Raw,
    LinkTool,
    Delimiter,
    Alert,
    Table,
    Code,
    Quote,
    Video,
    Embed,
    Image,
    Warning,
}

impl BlockType {
    pub const ALL: [BlockType; 14] = [
        BlockType::Header,
        BlockType::Paragraph,
        BlockType::List,
        BlockType::Raw,
        BlockType::LinkTool,
        BlockType::Delimiter,
        BlockType::Alert,
        BlockType::Table,
        BlockType::Code,
        BlockType::Quote,
        BlockType::Video,
        BlockType::Embed,
        BlockType::Image,
        BlockType::Warning,
    ];

    /// Type name as written in class tokens and output JSON
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Paragraph => "paragraph",
            BlockType::List => "list",
            BlockType::Raw => "raw",
            BlockType::LinkTool => "linkTool",
            BlockType::Delimiter => "delimiter",
            BlockType::Alert => "alert",
            BlockType::Table => "table",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::Video => "video",
            BlockType::Embed => "embed",
            BlockType::Image => "image",
            BlockType::Warning => "warning",
        }
    }

    /// Look up a type by the name decoded from a class token, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|block_type| block_type.name().eq_ignore_ascii_case(name))
    }
}

/// Registry mapping block types to their extractors
pub struct Registry {
    extractors: IndexMap<BlockType, Extractor>,
}

impl Registry {
    /// Create a registry holding the 14 standard extractors
    pub fn new() -> Self {
        let mut extractors = IndexMap::new();
        for extractor in standard_extractors() {
            extractors.insert(extractor.block_type, extractor);
        }
        Self { extractors }
    }

    /// Resolve the extractor for a decoded type name
    pub fn resolve(&self, name: &str) -> Result<&Extractor> {
        BlockType::from_name(name)
            .and_then(|block_type| self.extractors.get(&block_type))
            .ok_or_else(|| ParserError::UnknownBlockType(name.to_string()))
    }

    /// Number of registered extractors
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_types() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 14);
        for block_type in BlockType::ALL {
            let extractor = registry.resolve(block_type.name()).unwrap();
            assert_eq!(extractor.block_type, block_type);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(BlockType::from_name("header"), Some(BlockType::Header));
        assert_eq!(BlockType::from_name("linkTool"), Some(BlockType::LinkTool));
        assert_eq!(BlockType::from_name("Paragraph"), Some(BlockType::Paragraph));
        assert_eq!(BlockType::from_name("linktool"), Some(BlockType::LinkTool));
        assert_eq!(BlockType::from_name("headers"), None);
        assert_eq!(BlockType::from_name(""), None);
    }

    #[test]
    fn test_unknown_type() {
        let registry = Registry::new();
        match registry.resolve("foobar") {
            Err(ParserError::UnknownBlockType(name)) => assert_eq!(name, "foobar"),
            other => panic!("expected UnknownBlockType, got {:?}", other.map(|e| e.block_type)),
        }
    }
}
