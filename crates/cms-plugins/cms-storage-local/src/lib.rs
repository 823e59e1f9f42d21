//! # cms-storage-local
//!
//! Local filesystem implementation of `AssetStore`. Uploads land under a
//! root directory, mirroring the storage key as a relative path, and are
//! served from a configurable public URL prefix.

use async_trait::async_trait;
use cms_core::error::AppError;
use cms_core::traits::AssetStore;
use std::path::PathBuf;
use tokio::fs;

pub struct LocalAssetStore {
    /// Root directory for all uploads (e.g., "./data/uploads")
    root_path: PathBuf,
    /// Public URL prefix (e.g., "/static/uploads")
    url_prefix: String,
}

impl LocalAssetStore {
    pub fn new(root: PathBuf, url_prefix: String) -> Self {
        Self {
            root_path: root,
            url_prefix,
        }
    }

    fn target_path(&self, key: &str) -> PathBuf {
        self.root_path.join(key)
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    /// Writes the bytes under `key`, creating parent directories as needed.
    /// An occupied key is a conflict: keys are derived to be unique, so an
    /// existing file means the caller's key derivation is broken.
    async fn upload(&self, key: &str, data: Vec<u8>, cache_control: &str) -> anyhow::Result<()> {
        let target = self.target_path(key);

        if target.exists() {
            return Err(AppError::Conflict(format!("storage key '{key}' already exists")).into());
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&target, &data).await?;

        // The filesystem has no metadata channel; remote stores forward this.
        log::debug!("stored {key} ({} bytes, cache-control: {cache_control})", data.len());
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.url_prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::assets::upload_asset;
    use uuid::Uuid;

    /// Unique scratch directory per test; in-tree tempdir crates are
    /// overkill for two files.
    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cms-storage-test-{}", Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn upload_writes_bytes_and_resolves_url() {
        let root = scratch_dir();
        let store = LocalAssetStore::new(root.clone(), "/static/uploads".into());

        store
            .upload("demo/demo-1-abc-a.jpg", vec![1, 2, 3], "max-age=3600")
            .await
            .unwrap();

        let written = std::fs::read(root.join("demo/demo-1-abc-a.jpg")).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
        assert_eq!(
            store.public_url("demo/demo-1-abc-a.jpg"),
            "/static/uploads/demo/demo-1-abc-a.jpg"
        );
    }

    #[tokio::test]
    async fn occupied_key_is_a_conflict() {
        let store = LocalAssetStore::new(scratch_dir(), "/static/uploads".into());

        store
            .upload("demo/x.jpg", vec![1], "max-age=3600")
            .await
            .unwrap();
        let err = store
            .upload("demo/x.jpg", vec![2], "max-age=3600")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn double_upload_of_same_file_yields_distinct_urls() {
        let root = scratch_dir();
        let source = root.join("IMG_0977.jpg");
        std::fs::write(&source, b"jpeg bytes").unwrap();

        let store = LocalAssetStore::new(root.clone(), "/static/uploads".into());
        let first = upload_asset(&store, &source, "demo").await.unwrap();
        let second = upload_asset(&store, &source, "demo").await.unwrap();

        assert_ne!(first, second);
        for url in [&first, &second] {
            assert!(url.starts_with("/static/uploads/demo/demo-"));
            assert!(url.ends_with("-IMG_0977.jpg"));
        }
    }

    #[tokio::test]
    async fn missing_file_fails_before_any_store_call() {
        let root = scratch_dir();
        let store = LocalAssetStore::new(root.clone(), "/static/uploads".into());

        let err = upload_asset(&store, &root.join("nope.jpg"), "demo")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
        // nothing was written under the namespace
        assert!(!root.join("demo").exists());
    }
}
