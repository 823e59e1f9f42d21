//! # cms-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite relational
//! model and the `cms-core` domain models. UUIDs are stored as 16-byte
//! blobs, section content as serialized JSON text.

use async_trait::async_trait;
use cms_core::models::{Page, PageDef, Section, SectionDraft, SectionType};
use cms_core::traits::PageStore;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use uuid::Uuid;

const SCHEMA: [&str; 2] = [
    r#"
CREATE TABLE IF NOT EXISTS cms_pages (
    id           BLOB PRIMARY KEY,
    slug         TEXT NOT NULL UNIQUE,
    title        TEXT NOT NULL,
    description  TEXT NOT NULL,
    is_published BOOLEAN NOT NULL DEFAULT TRUE,
    created_at   TEXT NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS cms_sections (
    id           BLOB PRIMARY KEY,
    page_id      BLOB NOT NULL REFERENCES cms_pages(id) ON DELETE CASCADE,
    section_type TEXT NOT NULL,
    content      TEXT NOT NULL,
    order_index  INTEGER NOT NULL,
    UNIQUE (page_id, order_index)
)"#,
];

pub struct SqlitePageStore {
    pool: SqlitePool,
}

// Helpers for UUID conversion
fn uuid_to_blob(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

fn blob_to_uuid(blob: &[u8]) -> Uuid {
    Uuid::from_slice(blob).unwrap_or_default()
}

impl SqlitePageStore {
    /// Connects and creates the schema when absent.
    ///
    /// A single connection is used so that `sqlite::memory:` refers to one
    /// database (in-memory SQLite is per-connection).
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;
        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }
        Ok(Self { pool })
    }
}

#[async_trait]
impl PageStore for SqlitePageStore {
    /// Upsert keyed by slug: an existing row keeps its id and gets its
    /// attributes rewritten, a new row is minted a UUID v7.
    async fn upsert_page(&self, page: &PageDef) -> anyhow::Result<Uuid> {
        let existing = sqlx::query("SELECT id FROM cms_pages WHERE slug = ?")
            .bind(&page.slug)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(row) = existing {
            let id = blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice());
            sqlx::query(
                "UPDATE cms_pages SET title = ?, description = ?, is_published = ? WHERE id = ?",
            )
            .bind(&page.title)
            .bind(&page.description)
            .bind(page.is_published)
            .bind(uuid_to_blob(id))
            .execute(&self.pool)
            .await?;
            Ok(id)
        } else {
            let id = Uuid::now_v7();
            sqlx::query(
                "INSERT INTO cms_pages (id, slug, title, description, is_published, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(uuid_to_blob(id))
            .bind(&page.slug)
            .bind(&page.title)
            .bind(&page.description)
            .bind(page.is_published)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await?;
            Ok(id)
        }
    }

    async fn delete_sections(&self, page_id: Uuid) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM cms_sections WHERE page_id = ?")
            .bind(uuid_to_blob(page_id))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_section(&self, page_id: Uuid, draft: &SectionDraft) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO cms_sections (id, page_id, section_type, content, order_index) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(Uuid::now_v7()))
        .bind(uuid_to_blob(page_id))
        .bind(draft.section_type.as_str())
        .bind(serde_json::to_string(&draft.content)?)
        .bind(draft.order_index)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_page(&self, slug: &str) -> anyhow::Result<Option<Page>> {
        let row = sqlx::query(
            "SELECT id, slug, title, description, is_published, created_at FROM cms_pages WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Page {
            id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
            slug: row.get("slug"),
            title: row.get("title"),
            description: row.get("description"),
            is_published: row.get("is_published"),
            created_at: row.get("created_at"),
        }))
    }

    async fn list_sections(&self, page_id: Uuid) -> anyhow::Result<Vec<Section>> {
        let rows = sqlx::query(
            "SELECT id, page_id, section_type, content, order_index FROM cms_sections WHERE page_id = ? ORDER BY order_index ASC",
        )
        .bind(uuid_to_blob(page_id))
        .fetch_all(&self.pool)
        .await?;

        let mut sections = Vec::with_capacity(rows.len());
        for row in rows {
            let tag: String = row.get("section_type");
            let section_type = SectionType::parse(&tag)
                .ok_or_else(|| anyhow::anyhow!("unknown section type '{tag}' in store"))?;
            sections.push(Section {
                id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
                page_id: blob_to_uuid(row.get::<Vec<u8>, _>("page_id").as_slice()),
                section_type,
                order_index: row.get("order_index"),
                content: serde_json::from_str(&row.get::<String, _>("content"))?,
            });
        }
        Ok(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::assembly::build_demo_page;
    use cms_core::seeder::apply_page;

    async fn memory_store() -> SqlitePageStore {
        SqlitePageStore::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn apply_is_idempotent() {
        let store = memory_store().await;
        let (page, sections) = build_demo_page("demo", None).unwrap();

        let first = apply_page(&store, &page, &sections).await.unwrap();
        let second = apply_page(&store, &page, &sections).await.unwrap();

        // same identity, no accumulation
        assert_eq!(first.page_id, second.page_id);
        assert!(second.is_complete());

        let stored = store.list_sections(second.page_id).await.unwrap();
        assert_eq!(stored.len(), sections.len());
        for (i, section) in stored.iter().enumerate() {
            assert_eq!(section.order_index, i as i64);
            assert_eq!(section.section_type, sections[i].section_type);
        }
    }

    #[tokio::test]
    async fn upsert_updates_title_in_place() {
        let store = memory_store().await;
        let (mut page, sections) = build_demo_page("demo", None).unwrap();

        let first = apply_page(&store, &page, &sections).await.unwrap();

        page.title = "CMS Demo - Updated".to_string();
        let second = apply_page(&store, &page, &sections).await.unwrap();

        assert_eq!(first.page_id, second.page_id);
        let stored = store.get_page("demo").await.unwrap().unwrap();
        assert_eq!(stored.id, first.page_id);
        assert_eq!(stored.title, "CMS Demo - Updated");
    }

    #[tokio::test]
    async fn content_round_trips_through_json_text() {
        let store = memory_store().await;
        let url = "https://cdn.example.com/cms-images/demo/pic.jpg";
        let (page, sections) = build_demo_page("demo", Some(url)).unwrap();

        let report = apply_page(&store, &page, &sections).await.unwrap();
        let stored = store.list_sections(report.page_id).await.unwrap();

        assert_eq!(stored[0].content["background_image"], url);
        assert_eq!(stored[0].content, sections[0].content);
    }

    #[tokio::test]
    async fn missing_page_is_none() {
        let store = memory_store().await;
        assert!(store.get_page("nope").await.unwrap().is_none());
    }
}
