//! # cms-seed
//!
//! Seeds the demo CMS page: optionally uploads a sample image, assembles the
//! canonical section set, and applies it idempotently against the store.
//! Safe to re-run; repeated invocations converge instead of duplicating.

mod config;

use cms_core::assets::upload_asset;
use cms_core::error::AppError;
use cms_core::{apply_page, build_demo_page};
use cms_db_sqlite::SqlitePageStore;
use cms_storage_local::LocalAssetStore;
use config::SeedConfig;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SeedConfig::from_env();
    if let Err(e) = run(config).await {
        log::error!("seed failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: SeedConfig) -> anyhow::Result<()> {
    log::info!("CMS demo page seeder starting");

    // Precondition: the configured image must exist before any store work
    if let Some(image) = &config.seed_image {
        if !image.is_file() {
            return Err(AppError::Precondition(format!(
                "SEED_IMAGE points at {}, which does not exist",
                image.display()
            ))
            .into());
        }
    }

    let store = SqlitePageStore::new(&config.database_url).await?;
    log::info!("connected to store at {}", config.database_url);

    let image_url = match &config.seed_image {
        Some(image) => {
            let assets = LocalAssetStore::new(
                config.asset_root.clone(),
                config.asset_url_prefix.clone(),
            );
            Some(upload_asset(&assets, image, &config.page_slug).await?)
        }
        None => {
            log::info!("no SEED_IMAGE configured, image fields will be null");
            None
        }
    };

    let (page, sections) = build_demo_page(&config.page_slug, image_url.as_deref())?;
    let report = apply_page(&store, &page, &sections).await?;

    println!("\nDemo page setup complete!");
    println!("\nSections created:");
    for section in &sections {
        let status = if report.failed.iter().any(|(ty, _)| *ty == section.section_type) {
            "FAILED"
        } else {
            "ok"
        };
        println!("  {}. {:<12} {status}", section.order_index + 1, section.section_type);
    }
    if !report.is_complete() {
        println!(
            "\nWarning: {} of {} sections failed to insert; re-running is safe.",
            report.failed.len(),
            sections.len()
        );
    }
    println!("\nView your demo page at:");
    println!("  http://localhost:5173/pages/{} (development)", page.slug);

    Ok(())
}
