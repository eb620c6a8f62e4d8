use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod local;

// filesystem seam for the template loader. production reads from disk,
// tests plug in an in-memory fake
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List the files directly under `root` whose name ends with `suffix`.
    async fn list_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>>;
}
