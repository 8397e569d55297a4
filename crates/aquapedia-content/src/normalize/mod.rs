//! Block schema validation.
//!
//! Stored descriptions come back from the API as untrusted JSON: written by
//! older dashboard builds, touched by hand in the database, or produced by
//! editor plugins this build doesn't know about. [`normalize`] maps any of
//! that to a schema-valid [`Document`] without ever failing — malformed
//! blocks are dropped, malformed fields take their zero value.

use serde_json::{Map, Value};

use crate::schema::{Block, BlockData, Document, EDITOR_VERSION, ListStyle, QuoteAlignment};

/// Normalize an arbitrary JSON value into a valid [`Document`].
///
/// Total over its input: every value maps to *some* document, and the
/// function never panics. Non-object input, or input without a `blocks`
/// array, becomes the empty document. The result is structurally idempotent:
/// feeding a normalized document's wire form back in reproduces it.
pub fn normalize(input: Value) -> Document {
    let Value::Object(mut root) = input else {
        return Document::empty();
    };
    let Some(Value::Array(entries)) = root.remove("blocks") else {
        return Document::empty();
    };

    let blocks = entries.into_iter().filter_map(normalize_entry).collect();
    let version = match root.remove("version") {
        Some(Value::String(v)) if !v.is_empty() => v,
        _ => EDITOR_VERSION.to_string(),
    };

    Document { blocks, version }
}

/// Pre-filter one `blocks` array entry. Entries that are not objects, have
/// no usable `type` tag, or no `data` object are silently dropped.
fn normalize_entry(entry: Value) -> Option<Block> {
    let Value::Object(mut obj) = entry else {
        return None;
    };
    let tool = match obj.remove("type") {
        Some(Value::String(tool)) if !tool.is_empty() => tool,
        _ => return None,
    };
    let data = match obj.remove("data") {
        Some(Value::Object(data)) => data,
        _ => return None,
    };
    // Preserved, never generated. Editor.js ids are strings; anything else
    // is treated as absent.
    let id = match obj.remove("id") {
        Some(Value::String(id)) => Some(id),
        _ => None,
    };

    Some(Block {
        id,
        data: normalize_data(tool, data),
    })
}

/// Per-tool field coercion. Unknown tools keep their payload verbatim.
fn normalize_data(tool: String, mut data: Map<String, Value>) -> BlockData {
    match tool.as_str() {
        "header" => BlockData::Header {
            text: string(&mut data, "text"),
            level: heading_level(&mut data),
        },
        "paragraph" => BlockData::Paragraph {
            text: string(&mut data, "text"),
        },
        "list" => BlockData::List {
            style: ListStyle::from_tag(&string(&mut data, "style")).unwrap_or_default(),
            items: strings(&mut data, "items"),
        },
        "quote" => BlockData::Quote {
            text: string(&mut data, "text"),
            caption: string(&mut data, "caption"),
            alignment: QuoteAlignment::from_tag(&string(&mut data, "alignment"))
                .unwrap_or_default(),
        },
        "code" => BlockData::Code {
            code: string(&mut data, "code"),
        },
        "table" => BlockData::Table {
            with_headings: flag(&mut data, "withHeadings"),
            content: rows(&mut data, "content"),
        },
        "image" => BlockData::Image {
            file: object(&mut data, "file"),
            caption: string(&mut data, "caption"),
            with_border: flag(&mut data, "withBorder"),
            with_background: flag(&mut data, "withBackground"),
            stretched: flag(&mut data, "stretched"),
        },
        "simpleImage" => BlockData::SimpleImage {
            url: string(&mut data, "url"),
            caption: string(&mut data, "caption"),
        },
        "embed" => BlockData::Embed {
            service: string(&mut data, "service"),
            source: string(&mut data, "source"),
            embed: string(&mut data, "embed"),
            width: dimension(&mut data, "width", 580),
            height: dimension(&mut data, "height", 320),
            caption: string(&mut data, "caption"),
        },
        "warning" => BlockData::Warning {
            title: string(&mut data, "title"),
            message: string(&mut data, "message"),
        },
        "delimiter" => BlockData::Delimiter,
        "link" => BlockData::Link {
            link: string(&mut data, "link"),
            meta: object(&mut data, "meta"),
        },
        _ => BlockData::Opaque { tool, data },
    }
}

fn string(data: &mut Map<String, Value>, key: &str) -> String {
    match data.remove(key) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

fn flag(data: &mut Map<String, Value>, key: &str) -> bool {
    matches!(data.remove(key), Some(Value::Bool(true)))
}

fn object(data: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match data.remove(key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Numeric parse with fallback: accepts JSON numbers and numeric strings.
/// Zero and non-finite results fall back too; stored rows use zero where a
/// dimension was never set.
fn number(data: &mut Map<String, Value>, key: &str, default: i64) -> i64 {
    let parsed = match data.remove(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() && v as i64 != 0 => v as i64,
        _ => default,
    }
}

fn heading_level(data: &mut Map<String, Value>) -> u8 {
    number(data, "level", 2).clamp(1, 6) as u8
}

fn dimension(data: &mut Map<String, Value>, key: &str, default: u32) -> u32 {
    u32::try_from(number(data, key, i64::from(default))).unwrap_or(default)
}

/// Scalar cell/item text. Numbers and booleans render as text; arrays,
/// objects and null go blank.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn strings(data: &mut Map<String, Value>, key: &str) -> Vec<String> {
    match data.remove(key) {
        Some(Value::Array(items)) => items.into_iter().map(cell_text).collect(),
        _ => Vec::new(),
    }
}

/// Table grid. Rows keep their own lengths; a non-array row becomes empty
/// rather than dropping and renumbering the rows below it.
fn rows(data: &mut Map<String, Value>, key: &str) -> Vec<Vec<String>> {
    match data.remove(key) {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .map(|row| match row {
                Value::Array(cells) => cells.into_iter().map(cell_text).collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}
