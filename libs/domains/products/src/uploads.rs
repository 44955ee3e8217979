//! On-disk storage for uploaded product images.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use tracing::instrument;

use crate::error::ProductResult;

/// Public URL prefix under which saved files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Stores uploaded files in a local directory.
///
/// Filenames are prefixed with a timestamp and a random salt, so two
/// uploads of the same file never collide. Only the final path
/// component of the client-supplied name is kept.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory if needed.
    pub async fn create(dir: impl Into<PathBuf>) -> ProductResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Directory the files live in, for static serving.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the file and return its public URL.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> ProductResult<String> {
        let name = unique_name(original_name);
        tokio::fs::write(self.dir.join(&name), bytes).await?;

        tracing::info!(file = %name, "Upload stored");
        Ok(format!("{PUBLIC_PREFIX}/{name}"))
    }
}

fn unique_name(original_name: &str) -> String {
    // Strip any directory components the client sent along
    let base = Path::new(original_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let millis = Utc::now().timestamp_millis();
    let salt: u32 = rand::rng().random_range(0..1_000_000_000);
    format!("{millis}-{salt}-{base}")
}
