//! Content presence check.
//!
//! The dashboard needs to tell an empty draft from a draft with real
//! content (to decide whether a locale tab shows its filled-in marker and
//! whether a save is worth sending). This runs over a normalized
//! [`Document`] only; raw input goes through the validator first.

use serde_json::Value;

use crate::schema::{Block, BlockData, Document};

impl Document {
    /// Whether any block carries user-visible content.
    pub fn has_content(&self) -> bool {
        self.blocks.iter().any(Block::has_content)
    }
}

impl Block {
    pub fn has_content(&self) -> bool {
        self.data.has_content()
    }
}

impl BlockData {
    /// Per-tool non-emptiness. Delimiters always count (placing one is
    /// itself a deliberate act), and unknown tools count conservatively:
    /// we cannot inspect a payload we do not understand, so we assume it
    /// holds something.
    pub fn has_content(&self) -> bool {
        match self {
            BlockData::Header { text, .. } | BlockData::Paragraph { text } => has_text(text),
            BlockData::List { items, .. } => items.iter().any(|item| has_text(item)),
            BlockData::Quote { text, caption, .. } => has_text(text) || has_text(caption),
            BlockData::Code { code } => has_text(code),
            BlockData::Table { content, .. } => {
                content.iter().any(|row| row.iter().any(|cell| has_text(cell)))
            }
            BlockData::Image { file, .. } => {
                is_truthy(file.get("url")) || is_truthy(file.get("path"))
            }
            BlockData::SimpleImage { url, .. } => has_text(url),
            BlockData::Embed { source, .. } => has_text(source),
            BlockData::Warning { title, message } => has_text(title) || has_text(message),
            BlockData::Delimiter => true,
            BlockData::Link { link, .. } => has_text(link),
            BlockData::Opaque { .. } => true,
        }
    }
}

fn has_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// JavaScript-style truthiness for the opaque `image.file` payload, which
/// older rows store with whatever the upload service returned.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
