pub mod content;
pub mod models;
pub mod normalize;
pub mod parsing;
pub mod schema;

// Re-export key types for easier usage
pub use models::{Locale, Translation, UnknownLocale, for_locale};
pub use normalize::normalize;
pub use parsing::{ContentError, from_stored, parse, try_parse};
pub use schema::{Block, BlockData, Document, EDITOR_VERSION, ListStyle, QuoteAlignment};
