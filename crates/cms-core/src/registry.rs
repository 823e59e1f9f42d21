//! # Section Schema Registry
//!
//! The authoritative list of section types and the content keys each one
//! must carry. This is static configuration: assembly validates its output
//! against the registry and fails fast on drift, so a malformed template
//! never reaches the store.

use crate::error::{AppError, Result};
use crate::models::SectionType;
use serde_json::Value;

/// The content keys required for each section type.
pub fn required_fields(ty: SectionType) -> &'static [&'static str] {
    match ty {
        SectionType::Hero => &[
            "headline",
            "headline_highlight",
            "subheadline",
            "cta_text",
            "cta_link",
            "background_image",
        ],
        SectionType::Features => &["features"],
        SectionType::Steps => &["title", "steps"],
        SectionType::Categories => &["title", "categories"],
        SectionType::TextSection => &[
            "section_title",
            "body_content",
            "text_alignment",
            "max_width",
            "background_style",
            "show_divider",
            "text_style_preset",
            "title_style",
            "text_size",
            "visual_tone",
            "accent_icon",
            "emphasize_section",
            "vertical_spacing",
        ],
        SectionType::Showcase => &["title", "items"],
        SectionType::Gallery => &["title", "images", "columns"],
        SectionType::Cta => &[
            "heading",
            "description",
            "button_text",
            "button_link",
            "background_color",
        ],
    }
}

/// Checks that `content` is a JSON object carrying every required key for
/// `ty`. Values are not type-checked beyond presence; the keys themselves
/// are the contract with the rendering side.
pub fn validate(ty: SectionType, content: &Value) -> Result<()> {
    let obj = content.as_object().ok_or_else(|| {
        AppError::Validation(format!("{ty} content must be a JSON object"))
    })?;

    for key in required_fields(ty) {
        if !obj.contains_key(*key) {
            return Err(AppError::Validation(format!(
                "{ty} content is missing required key '{key}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_type_has_fields() {
        for ty in SectionType::ALL {
            assert!(!required_fields(ty).is_empty());
        }
    }

    #[test]
    fn rejects_non_object_content() {
        let err = validate(SectionType::Cta, &json!("not an object")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_missing_key() {
        let content = json!({ "heading": "x" });
        let err = validate(SectionType::Cta, &content).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn accepts_null_values_for_present_keys() {
        // background_image may legitimately be null; presence is what counts
        let content = json!({
            "headline": "Welcome",
            "headline_highlight": "CMS",
            "subheadline": "sub",
            "cta_text": "Go",
            "cta_link": "/register",
            "background_image": null,
        });
        validate(SectionType::Hero, &content).unwrap();
    }
}
