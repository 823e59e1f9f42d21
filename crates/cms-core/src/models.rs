//! # Domain Models
//!
//! These structs represent the page/section entities of the CMS seeder.
//! We use UUID v7 for time-ordered, globally unique identification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The page attributes a seed run wants to converge on.
/// Keyed by `slug`; carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDef {
    /// The unique URL slug (e.g., "demo" for /pages/demo)
    pub slug: String,
    pub title: String,
    pub description: String,
    pub is_published: bool,
}

/// A persisted CMS page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// The recognized section variants. The serde tag is the wire/DB value
/// (kebab-case, e.g. "text-section").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Hero,
    Features,
    Steps,
    Categories,
    TextSection,
    Showcase,
    Gallery,
    Cta,
}

impl SectionType {
    /// Every known variant, in no particular order.
    pub const ALL: [SectionType; 8] = [
        SectionType::Hero,
        SectionType::Features,
        SectionType::Steps,
        SectionType::Categories,
        SectionType::TextSection,
        SectionType::Showcase,
        SectionType::Gallery,
        SectionType::Cta,
    ];

    /// The canonical string tag stored in the `section_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Steps => "steps",
            SectionType::Categories => "categories",
            SectionType::TextSection => "text-section",
            SectionType::Showcase => "showcase",
            SectionType::Gallery => "gallery",
            SectionType::Cta => "cta",
        }
    }

    /// Inverse of [`as_str`](Self::as_str); `None` for unknown tags.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == tag)
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An assembled section that has not been persisted yet.
/// `content` is a schema-free JSON document whose shape depends on
/// `section_type` (see [`crate::registry`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub section_type: SectionType,
    /// Render order within the page, contiguous from 0.
    pub order_index: i64,
    pub content: serde_json::Value,
}

/// A persisted section row owned by exactly one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub page_id: Uuid,
    pub section_type: SectionType,
    pub order_index: i64,
    pub content: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_type_tags_round_trip() {
        for ty in SectionType::ALL {
            assert_eq!(SectionType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(SectionType::parse("carousel"), None);
    }

    #[test]
    fn section_type_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SectionType::TextSection).unwrap();
        assert_eq!(json, "\"text-section\"");
    }
}
