use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// List rendering style (`list.style` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStyle::Ordered => "ordered",
            ListStyle::Unordered => "unordered",
        }
    }

    /// Parse the wire tag; anything unrecognized is `None` so the caller
    /// can fall back to the default style.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ordered" => Some(ListStyle::Ordered),
            "unordered" => Some(ListStyle::Unordered),
            _ => None,
        }
    }
}

/// Quote caption alignment (`quote.alignment` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteAlignment {
    #[default]
    Left,
    Center,
}

impl QuoteAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteAlignment::Left => "left",
            QuoteAlignment::Center => "center",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(QuoteAlignment::Left),
            "center" => Some(QuoteAlignment::Center),
            _ => None,
        }
    }
}

/// The per-tool payload of a block, keyed by the `type` tag on the wire.
///
/// One variant per Editor.js tool the dashboard configures, plus `Opaque`
/// for any other tool type: those payloads cross the validator untouched,
/// since only known tools get field-level coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    /// `header`: section heading with a level clamped to 1..=6.
    Header { text: String, level: u8 },
    /// `paragraph`: plain rich-text run.
    Paragraph { text: String },
    /// `list`: flat ordered/unordered list.
    List { style: ListStyle, items: Vec<String> },
    /// `quote`: quotation with optional caption.
    Quote {
        text: String,
        caption: String,
        alignment: QuoteAlignment,
    },
    /// `code`: verbatim code snippet.
    Code { code: String },
    /// `table`: 2D grid of cells. Rows keep their own lengths; the grid is
    /// not rectangularized.
    Table {
        with_headings: bool,
        content: Vec<Vec<String>>,
    },
    /// `image`: uploaded image. `file` is kept opaque (the upload service
    /// decides its keys; `url` and `path` are the usual ones).
    Image {
        file: Map<String, Value>,
        caption: String,
        with_border: bool,
        with_background: bool,
        stretched: bool,
    },
    /// `simpleImage`: image by URL, no upload record.
    SimpleImage { url: String, caption: String },
    /// `embed`: third-party embed (YouTube etc.).
    Embed {
        service: String,
        source: String,
        embed: String,
        width: u32,
        height: u32,
        caption: String,
    },
    /// `warning`: call-out box with title and message.
    Warning { title: String, message: String },
    /// `delimiter`: visual separator, no payload.
    Delimiter,
    /// `link`: link preview card. `meta` is whatever the link fetcher
    /// scraped and is passed through opaque.
    Link {
        link: String,
        meta: Map<String, Value>,
    },
    /// Any unrecognized tool type, payload verbatim.
    Opaque {
        tool: String,
        data: Map<String, Value>,
    },
}

impl BlockData {
    /// The wire `type` tag for this payload.
    pub fn kind(&self) -> &str {
        match self {
            BlockData::Header { .. } => "header",
            BlockData::Paragraph { .. } => "paragraph",
            BlockData::List { .. } => "list",
            BlockData::Quote { .. } => "quote",
            BlockData::Code { .. } => "code",
            BlockData::Table { .. } => "table",
            BlockData::Image { .. } => "image",
            BlockData::SimpleImage { .. } => "simpleImage",
            BlockData::Embed { .. } => "embed",
            BlockData::Warning { .. } => "warning",
            BlockData::Delimiter => "delimiter",
            BlockData::Link { .. } => "link",
            BlockData::Opaque { tool, .. } => tool,
        }
    }

    /// The wire `data` object for this payload.
    pub fn payload(&self) -> Value {
        match self {
            BlockData::Header { text, level } => json!({ "text": text, "level": level }),
            BlockData::Paragraph { text } => json!({ "text": text }),
            BlockData::List { style, items } => json!({
                "style": style.as_str(),
                "items": items,
            }),
            BlockData::Quote {
                text,
                caption,
                alignment,
            } => json!({
                "text": text,
                "caption": caption,
                "alignment": alignment.as_str(),
            }),
            BlockData::Code { code } => json!({ "code": code }),
            BlockData::Table {
                with_headings,
                content,
            } => json!({
                "withHeadings": with_headings,
                "content": content,
            }),
            BlockData::Image {
                file,
                caption,
                with_border,
                with_background,
                stretched,
            } => json!({
                "file": file,
                "caption": caption,
                "withBorder": with_border,
                "withBackground": with_background,
                "stretched": stretched,
            }),
            BlockData::SimpleImage { url, caption } => json!({
                "url": url,
                "caption": caption,
            }),
            BlockData::Embed {
                service,
                source,
                embed,
                width,
                height,
                caption,
            } => json!({
                "service": service,
                "source": source,
                "embed": embed,
                "width": width,
                "height": height,
                "caption": caption,
            }),
            BlockData::Warning { title, message } => json!({
                "title": title,
                "message": message,
            }),
            BlockData::Delimiter => json!({}),
            BlockData::Link { link, meta } => json!({
                "link": link,
                "meta": meta,
            }),
            BlockData::Opaque { data, .. } => Value::Object(data.clone()),
        }
    }
}

/// One content unit in a document: a payload plus the editor-assigned id.
///
/// Ids are opaque. Normalization preserves them when present and never
/// generates new ones; a block freshly built in code simply has none.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Option<String>,
    pub data: BlockData,
}

impl Block {
    pub fn new(data: BlockData) -> Self {
        Self { id: None, data }
    }

    /// Wire form: `{"type": …, "data": …, "id"?: …}`.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), Value::String(self.data.kind().to_string()));
        obj.insert("data".into(), self.data.payload());
        if let Some(id) = &self.id {
            obj.insert("id".into(), Value::String(id.clone()));
        }
        Value::Object(obj)
    }
}

impl From<BlockData> for Block {
    fn from(data: BlockData) -> Self {
        Self::new(data)
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
