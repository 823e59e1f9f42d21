//! # Core Traits (Ports)
//!
//! Any store adapter must implement these traits to be driven by the seeder.

use crate::models::{Page, PageDef, Section, SectionDraft};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence contract for pages and their sections.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Insert-or-update keyed by `slug`. An existing page keeps its
    /// identity and gets `title`/`description`/`is_published` rewritten;
    /// a new page is minted a fresh id. Returns the page identity.
    async fn upsert_page(&self, page: &PageDef) -> anyhow::Result<Uuid>;

    /// Removes every section owned by the page. Returns the removed count.
    async fn delete_sections(&self, page_id: Uuid) -> anyhow::Result<u64>;

    /// Inserts one section, preserving the caller-provided `order_index`.
    async fn insert_section(&self, page_id: Uuid, draft: &SectionDraft) -> anyhow::Result<()>;

    /// Lookup by slug, used to verify convergence after a run.
    async fn get_page(&self, slug: &str) -> anyhow::Result<Option<Page>>;

    /// All sections of a page, ordered by `order_index` ascending.
    async fn list_sections(&self, page_id: Uuid) -> anyhow::Result<Vec<Section>>;
}

/// Object storage contract for uploaded assets.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stores raw bytes under `key`. An occupied key is an error, never a
    /// silent overwrite: keys are derived to be unique, so a collision
    /// indicates a bug in key derivation.
    async fn upload(&self, key: &str, data: Vec<u8>, cache_control: &str) -> anyhow::Result<()>;

    /// Returns the public retrieval URL for a stored key.
    fn public_url(&self, key: &str) -> String;
}
