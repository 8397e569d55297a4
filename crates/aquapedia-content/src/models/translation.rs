use serde::{Deserialize, Serialize};

use super::locale::Locale;
use crate::parsing::from_stored;
use crate::schema::Document;

/// One locale's translation of an encyclopedia entity, as the backend
/// stores it on articles, categories, subcategories and inhabitants.
///
/// `description` is the raw stored string: a serialized [`Document`] for
/// rows written by the block editor, bare plain text for older rows, or
/// absent when the locale was never filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub locale: Locale,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Translation {
    pub fn new(locale: Locale, title: impl Into<String>) -> Self {
        Self {
            id: None,
            locale,
            title: title.into(),
            description: None,
        }
    }

    /// The stored description resolved into a normalized [`Document`],
    /// legacy plain text included. Absent descriptions resolve to the
    /// empty draft.
    pub fn description_document(&self) -> Document {
        from_stored(self.description.as_deref().unwrap_or_default())
    }

    /// Whether this locale's description holds user-visible content.
    pub fn has_description(&self) -> bool {
        self.description_document().has_content()
    }

    /// Write a document back into the stored `description` form.
    pub fn set_description_document(&mut self, doc: &Document) {
        self.description = Some(doc.to_json());
    }
}

/// Pick the translation for one locale out of a backend `translations`
/// array, if that locale was ever filled in.
pub fn for_locale(translations: &[Translation], locale: Locale) -> Option<&Translation> {
    translations.iter().find(|t| t.locale == locale)
}
