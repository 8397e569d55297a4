use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::block::{Block, BlockData};

/// Version tag written when the stored payload carries none. Matches the
/// Editor.js release the dashboard shipped with, so round-tripped content
/// is indistinguishable from content the editor saved itself.
pub const EDITOR_VERSION: &str = "2.28.2";

/// A normalized rich-text document: the ordered block sequence behind one
/// locale's `description` field.
///
/// Instances only come out of [`normalize`](crate::normalize::normalize)
/// (or the constructors here), so holding a `Document` means the schema
/// invariants already hold: every block is well-formed and `version` is a
/// real tag. Block order is reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub version: String,
}

impl Document {
    /// The empty draft: no blocks, default version.
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            version: EDITOR_VERSION.to_string(),
        }
    }

    /// Wrap legacy plain text in a single paragraph block, verbatim.
    pub fn from_plain_text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::new(BlockData::Paragraph { text: text.into() })],
            version: EDITOR_VERSION.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Wire form: `{"blocks": […], "version": …}`.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "blocks".into(),
            Value::Array(self.blocks.iter().map(Block::to_value).collect()),
        );
        obj.insert("version".into(), Value::String(self.version.clone()));
        Value::Object(obj)
    }

    /// Serialize to the string the backend stores in `description`.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_serializes_with_version() {
        let doc = Document::empty();
        assert_eq!(
            doc.to_value(),
            json!({ "blocks": [], "version": EDITOR_VERSION })
        );
    }

    #[test]
    fn plain_text_becomes_one_paragraph() {
        let doc = Document::from_plain_text("Neon tetras school in the midwater.");
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(
            doc.to_value(),
            json!({
                "blocks": [{
                    "type": "paragraph",
                    "data": { "text": "Neon tetras school in the midwater." },
                }],
                "version": EDITOR_VERSION,
            })
        );
    }

    #[test]
    fn block_id_round_trips_through_wire_form() {
        let mut block = Block::new(BlockData::Code {
            code: "pH 6.8".into(),
        });
        block.id = Some("abc123".into());
        assert_eq!(
            block.to_value(),
            json!({ "type": "code", "data": { "code": "pH 6.8" }, "id": "abc123" })
        );
    }

    #[test]
    fn block_without_id_omits_the_key() {
        let block = Block::new(BlockData::Delimiter);
        assert_eq!(block.to_value(), json!({ "type": "delimiter", "data": {} }));
    }
}
