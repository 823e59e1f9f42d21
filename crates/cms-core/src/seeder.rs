//! # Idempotent page application
//!
//! Applies an assembled page against a [`PageStore`]: upsert the page by
//! slug, clear its existing sections, insert the new ones in order. Clearing
//! first is what makes re-runs converge instead of accumulating stale rows
//! from a previous template version.

use crate::models::{PageDef, SectionDraft, SectionType};
use crate::traits::PageStore;
use uuid::Uuid;

/// Outcome of one [`apply_page`] run. `failed` is non-empty when some
/// sections could not be inserted; the caller decides whether that warrants
/// a re-run (which is safe, the operation is idempotent end-to-end).
#[derive(Debug)]
pub struct ApplyReport {
    pub page_id: Uuid,
    pub inserted: usize,
    pub failed: Vec<(SectionType, String)>,
}

impl ApplyReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies `page` and its `sections` to the store.
///
/// A failing page upsert aborts the whole operation. Section inserts are
/// best-effort: one failure is logged and recorded, siblings still run.
pub async fn apply_page(
    store: &dyn PageStore,
    page: &PageDef,
    sections: &[SectionDraft],
) -> anyhow::Result<ApplyReport> {
    let page_id = store.upsert_page(page).await?;
    log::info!("page '{}' upserted as {page_id}", page.slug);

    let removed = store.delete_sections(page_id).await?;
    if removed > 0 {
        log::info!("cleared {removed} existing section(s) for '{}'", page.slug);
    }

    let mut inserted = 0;
    let mut failed = Vec::new();
    for draft in sections {
        match store.insert_section(page_id, draft).await {
            Ok(()) => inserted += 1,
            Err(e) => {
                log::warn!(
                    "failed to insert {} section at index {}: {e:#}",
                    draft.section_type,
                    draft.order_index
                );
                failed.push((draft.section_type, format!("{e:#}")));
            }
        }
    }

    Ok(ApplyReport {
        page_id,
        inserted,
        failed,
    })
}
