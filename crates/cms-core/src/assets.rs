//! # Asset upload helper
//!
//! Reads a local file, derives a collision-resistant storage key, uploads it
//! through an [`AssetStore`], and returns the public URL for embedding into
//! section content. Key uniqueness is best-effort (timestamp plus random
//! token), which is why the store refuses to overwrite an occupied key.

use crate::error::AppError;
use crate::traits::AssetStore;
use std::path::Path;

const TOKEN_LEN: usize = 8;
const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const CACHE_CONTROL: &str = "max-age=3600";

/// Derives the storage key `{slug}/{slug}-{millis}-{token}-{file_name}`.
/// Pure; the caller supplies the clock reading and the token.
pub fn storage_key(page_slug: &str, file_name: &str, timestamp_millis: i64, token: &str) -> String {
    format!("{page_slug}/{page_slug}-{timestamp_millis}-{token}-{file_name}")
}

/// An 8-char lowercase-alphanumeric token from OS randomness.
fn random_token() -> anyhow::Result<String> {
    let mut buf = [0u8; TOKEN_LEN];
    getrandom::getrandom(&mut buf)
        .map_err(|e| AppError::Internal(format!("randomness unavailable: {e}")))?;
    Ok(buf
        .iter()
        .map(|b| TOKEN_ALPHABET[(*b as usize) % TOKEN_ALPHABET.len()] as char)
        .collect())
}

/// Uploads the file at `path` under the `page_slug` namespace and returns
/// its public URL.
///
/// The file must exist before any store call is made; a missing file is a
/// precondition failure, not a storage error.
pub async fn upload_asset(
    store: &dyn AssetStore,
    path: &Path,
    page_slug: &str,
) -> anyhow::Result<String> {
    if !path.is_file() {
        return Err(AppError::Precondition(format!(
            "asset file not found at {}",
            path.display()
        ))
        .into());
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Precondition(format!("unusable file name: {}", path.display())))?;

    let data = tokio::fs::read(path).await?;
    log::info!("uploading {} ({} bytes)", path.display(), data.len());

    let key = storage_key(
        page_slug,
        file_name,
        chrono::Utc::now().timestamp_millis(),
        &random_token()?,
    );
    store.upload(&key, data, CACHE_CONTROL).await?;

    let url = store.public_url(&key);
    log::info!("asset available at {url}");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_has_the_expected_shape() {
        let key = storage_key("demo", "IMG_0977.jpg", 1700000000000, "a1b2c3d4");
        assert_eq!(key, "demo/demo-1700000000000-a1b2c3d4-IMG_0977.jpg");
    }

    #[test]
    fn tokens_are_lowercase_alphanumeric() {
        let token = random_token().unwrap();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn consecutive_tokens_differ() {
        // 36^8 keyspace; two equal draws in a row would point at a broken RNG
        let a = random_token().unwrap();
        let b = random_token().unwrap();
        assert_ne!(a, b);
    }
}
