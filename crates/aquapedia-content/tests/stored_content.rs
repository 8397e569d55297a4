//! End-to-end over the stored form: backend translations in, documents
//! out, edited documents back into stored strings.

use aquapedia_content::{Document, Locale, Translation, for_locale, from_stored};
use pretty_assertions::assert_eq;
use serde_json::json;

fn backend_translations() -> Vec<Translation> {
    serde_json::from_value(json!([
        {
            "id": "tr-az",
            "locale": "az",
            "title": "Diskus",
            // Legacy row: plain text from before the block editor.
            "description": "Diskuslar isti su sevir.",
        },
        {
            "id": "tr-ru",
            "locale": "ru",
            "title": "Дискус",
            "description": "{\"blocks\":[{\"type\":\"header\",\"data\":{\"text\":\"Дискус\",\"level\":2}},{\"type\":\"delimiter\",\"data\":{}}],\"version\":\"2.28.2\"}",
        },
        {
            "id": "tr-en",
            "locale": "en",
            "title": "Discus",
        },
    ]))
    .unwrap()
}

#[test]
fn each_locale_resolves_to_its_own_document() {
    let translations = backend_translations();

    let az = for_locale(&translations, Locale::Az).unwrap();
    assert_eq!(
        az.description_document(),
        Document::from_plain_text("Diskuslar isti su sevir.")
    );

    let ru = for_locale(&translations, Locale::Ru).unwrap();
    let ru_doc = ru.description_document();
    assert_eq!(ru_doc.blocks.len(), 2);
    assert!(ru_doc.has_content());

    let en = for_locale(&translations, Locale::En).unwrap();
    assert!(!en.has_description());
}

#[test]
fn editing_a_locale_round_trips_through_the_stored_string() {
    let mut translations = backend_translations();
    let doc = from_stored("The discus is a shy, tall-bodied cichlid.");

    let en = translations
        .iter_mut()
        .find(|t| t.locale == Locale::En)
        .unwrap();
    en.set_description_document(&doc);

    assert_eq!(en.description_document(), doc);
    assert!(en.has_description());
}

#[test]
fn corrupted_stored_rows_degrade_to_empty_drafts() {
    let mut translation = Translation::new(Locale::Ru, "Дискус");
    translation.description = Some("{\"blocks\": [truncated".into());
    assert_eq!(translation.description_document(), Document::empty());
    assert!(!translation.has_description());
}

#[test]
fn serialized_translations_match_the_backend_shape() {
    let translation = for_locale(&backend_translations(), Locale::Az)
        .unwrap()
        .clone();
    let value = serde_json::to_value(&translation).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "tr-az",
            "locale": "az",
            "title": "Diskus",
            "description": "Diskuslar isti su sevir.",
        })
    );
}
