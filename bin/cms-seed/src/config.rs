use std::path::PathBuf;

/// Seeder configuration loaded from environment variables.
///
/// | Env Var            | Default             |
/// |--------------------|---------------------|
/// | `DATABASE_URL`     | `sqlite:cms_seed.db?mode=rwc` |
/// | `ASSET_ROOT`       | `./data/uploads`    |
/// | `ASSET_URL_PREFIX` | `/static/uploads`   |
/// | `SEED_IMAGE`       | unset (no upload)   |
/// | `PAGE_SLUG`        | `demo`              |
///
/// `SEED_IMAGE`, when set, must point at an existing file; that is checked
/// before anything touches the store.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_url: String,
    pub asset_root: PathBuf,
    pub asset_url_prefix: String,
    pub seed_image: Option<PathBuf>,
    pub page_slug: String,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:cms_seed.db?mode=rwc".into());

        let asset_root: PathBuf = std::env::var("ASSET_ROOT")
            .unwrap_or_else(|_| "./data/uploads".into())
            .into();

        let asset_url_prefix =
            std::env::var("ASSET_URL_PREFIX").unwrap_or_else(|_| "/static/uploads".into());

        let seed_image = std::env::var("SEED_IMAGE").ok().map(PathBuf::from);

        let page_slug = std::env::var("PAGE_SLUG").unwrap_or_else(|_| "demo".into());

        Self {
            database_url,
            asset_root,
            asset_url_prefix,
            seed_image,
            page_slug,
        }
    }
}
