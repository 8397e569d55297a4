//! Stored-string parsing.
//!
//! A `description` field holds either a serialized document or, for rows
//! written before the block editor shipped, bare plain text. [`parse`]
//! handles the serialized form and never fails; [`from_stored`] adds the
//! legacy plain-text detection the dashboard applies before rendering.

use serde_json::Value;
use tracing::warn;

use crate::normalize::normalize;
use crate::schema::Document;

/// Failure to read a stored document string.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("stored document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Fallible form of [`parse`], for callers that need to tell a malformed
/// stored string apart from one that is legitimately empty. The happy path
/// still normalizes, so `Ok` always carries a schema-valid document.
pub fn try_parse(raw: &str) -> Result<Document, ContentError> {
    if raw.is_empty() {
        return Ok(Document::empty());
    }
    let value: Value = serde_json::from_str(raw)?;
    Ok(normalize(value))
}

/// Parse a stored description string into a normalized [`Document`].
///
/// Never fails: empty input and undecodable JSON both come back as the
/// empty document, with the failure reported on the log side channel only.
/// Callers cannot distinguish the two from the return value; use
/// [`try_parse`] where that matters.
pub fn parse(raw: &str) -> Document {
    match try_parse(raw) {
        Ok(doc) => doc,
        Err(error) => {
            warn!(%error, "discarding undecodable stored document");
            Document::empty()
        }
    }
}

/// Resolve a stored description that may predate the block editor.
///
/// Legacy rows hold bare plain text; current rows hold a serialized
/// document. The discriminator is the stored first character — `{` or `[`
/// means serialized, anything else means plain text wrapped into a single
/// paragraph. Deliberately kept as-is (untrimmed first character) for
/// read-compatibility with existing rows, even though plain text that
/// happens to open with a brace will be misread as JSON and come back
/// empty.
pub fn from_stored(raw: &str) -> Document {
    if raw.trim().is_empty() {
        return Document::empty();
    }
    if raw.starts_with('{') || raw.starts_with('[') {
        return parse(raw);
    }
    Document::from_plain_text(raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::schema::{BlockData, EDITOR_VERSION};

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case("{\"blocks\": [")]
    #[case("{broken")]
    fn undecodable_input_falls_back_to_empty(#[case] raw: &str) {
        assert_eq!(parse(raw), Document::empty());
    }

    #[test]
    fn valid_json_is_normalized() {
        let doc = parse(r#"{"blocks":[{"type":"code","data":{"code":"x"}}]}"#);
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].data, BlockData::Code { code: "x".into() });
        assert_eq!(doc.version, EDITOR_VERSION);
    }

    #[test]
    fn json_scalars_normalize_to_empty_without_error() {
        // "5" and "[1,2]" are valid JSON but not documents.
        assert_eq!(parse("5"), Document::empty());
        assert_eq!(parse("[1,2]"), Document::empty());
        assert!(try_parse("5").is_ok());
    }

    #[test]
    fn try_parse_surfaces_the_json_error() {
        assert!(matches!(
            try_parse("plain old text"),
            Err(ContentError::InvalidJson(_))
        ));
    }

    #[test]
    fn stored_plain_text_becomes_a_paragraph() {
        let doc = from_stored("Guppies tolerate a wide temperature range.");
        assert_eq!(
            doc,
            Document::from_plain_text("Guppies tolerate a wide temperature range.")
        );
    }

    #[test]
    fn stored_serialized_document_is_parsed() {
        let doc = from_stored(r#"{"blocks":[{"type":"paragraph","data":{"text":"hi"}}]}"#);
        assert_eq!(doc.blocks[0].data, BlockData::Paragraph { text: "hi".into() });
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    fn stored_blank_text_is_the_empty_draft(#[case] raw: &str) {
        assert_eq!(from_stored(raw), Document::empty());
    }

    #[test]
    fn brace_prefixed_plain_text_is_misread_as_json() {
        // Known limitation of the first-character discriminator, preserved
        // for compatibility with rows already stored this way.
        assert_eq!(from_stored("{not actually json"), Document::empty());
    }
}
