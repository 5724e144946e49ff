//! Output document assembly and JSON serialization

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::block::Block;

/// Indentation used for the JSON text form
const INDENT: &[u8] = b"    ";

/// A complete Editor.js document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Creation time in epoch milliseconds
    pub time: i64,
    pub blocks: Vec<Block>,
    pub version: String,
}

impl Document {
    pub fn new(time: i64, blocks: Vec<Block>, version: impl Into<String>) -> Self {
        Self {
            time,
            blocks,
            version: version.into(),
        }
    }

    /// Serialize to indented JSON text.
    ///
    /// Forward slashes and non-ASCII characters are written literally.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        to_json(self)
    }
}

/// Serialize any value with the document's JSON conventions
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = Vec::with_capacity(4096);
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Alignment, DelimiterData, ParagraphData};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_order() {
        let doc = Document::new(1, vec![], "2.19.0");
        let json = doc.to_json().unwrap();
        let time = json.find("\"time\"").unwrap();
        let blocks = json.find("\"blocks\"").unwrap();
        let version = json.find("\"version\"").unwrap();
        assert!(time < blocks && blocks < version);
    }

    #[test]
    fn test_pretty_output() {
        let doc = Document::new(
            1700000000000,
            vec![Block::Delimiter(DelimiterData::default())],
            "2.19.0",
        );
        let expected = r#"{
    "time": 1700000000000,
    "blocks": [
        {
            "type": "delimiter",
            "data": {}
        }
    ],
    "version": "2.19.0"
}"#;
        assert_eq!(doc.to_json().unwrap(), expected);
    }

    #[test]
    fn test_slashes_and_unicode_unescaped() {
        let doc = Document::new(
            0,
            vec![Block::Paragraph(ParagraphData {
                text: "Café <a href=\"https://example.com/x\">ü</a>".to_string(),
                alignment: Alignment::Left,
            })],
            "2.19.0",
        );
        let json = doc.to_json().unwrap();
        assert!(json.contains("https://example.com/x"));
        assert!(json.contains("Café"));
        assert!(json.contains(">ü<"));
        assert!(!json.contains("\\/"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_round_trip() {
        let doc = Document::new(
            5,
            vec![Block::Paragraph(ParagraphData {
                text: "Hi".to_string(),
                alignment: Alignment::Right,
            })],
            "2.19.0",
        );
        let parsed: Document = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
