use crate::io::TemplateSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct LocalTemplateSource;

#[async_trait]
impl TemplateSource for LocalTemplateSource {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read template file {}", path.display()))
    }

    async fn list_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();

        // templates live flat in the directory, no recursion needed
        for entry in WalkDir::new(root).max_depth(1) {
            let entry = entry
                .with_context(|| format!("Unable to scan template directory {}", root.display()))?;

            if entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(suffix)
            {
                entries.push(entry.into_path());
            }
        }

        // deterministic load order regardless of the OS directory iteration
        entries.sort();
        Ok(entries)
    }
}
