pub mod block;
pub mod document;

pub use block::{Block, BlockData, ListStyle, QuoteAlignment};
pub use document::{Document, EDITOR_VERSION};
