use crate::io::TemplateSource;
use crate::services::render::TemplateCache;
use derive_more::derive::{Display, Error};
use std::path::Path;
use std::sync::Arc;
use tera::Tera;

pub const PAGE_SUFFIX: &str = ".html.tmpl";
pub const LAYOUT_SUFFIX: &str = ".layout.tmpl";

#[derive(Debug, Display, Error)]
pub enum LoadError {
    // the filesystem scan or a file read failed before the engine ever saw
    // the source
    #[display("failed to collect *{suffix} files from {dir}: {reason}")]
    Discovery {
        dir: String,
        suffix: &'static str,
        reason: String,
    },

    // the file exists and was read, but its source does not compile
    #[display("template {key} failed to compile: {source}")]
    Parse { key: String, source: tera::Error },
}

/// Scan the template directory and compile every page into the cache.
///
/// Each page gets its own engine instance holding the page plus every layout
/// fragment, so a page may extend any layout by its base filename. A page
/// that extends nothing renders standalone, and a directory with no layout
/// files at all is not an error.
///
/// Any failure aborts loading immediately; the caller treats it as fatal.
pub async fn load_templates(
    source: &dyn TemplateSource,
    template_dir: &Path,
    cache: &TemplateCache,
) -> Result<usize, LoadError> {
    let layouts = read_sources(source, template_dir, LAYOUT_SUFFIX).await?;
    let pages = read_sources(source, template_dir, PAGE_SUFFIX).await?;

    let mut loaded = 0;
    for (key, page_source) in pages {
        let mut raw = layouts.clone();
        raw.push((key.clone(), page_source));

        let mut engine = Tera::default();
        engine.add_raw_templates(raw).map_err(|e| LoadError::Parse {
            key: key.clone(),
            source: e,
        })?;

        println!("Cached template {}", key);
        cache.set(&key, Arc::new(engine)).await;
        loaded += 1;
    }

    Ok(loaded)
}

// list the files carrying `suffix` and read each one, keyed by base filename
async fn read_sources(
    source: &dyn TemplateSource,
    dir: &Path,
    suffix: &'static str,
) -> Result<Vec<(String, String)>, LoadError> {
    let paths = source
        .list_files(dir, suffix)
        .await
        .map_err(|e| LoadError::Discovery {
            dir: dir.display().to_string(),
            suffix,
            reason: format!("{:#}", e),
        })?;

    let mut sources = Vec::new();
    for path in paths {
        let body = source
            .read_to_string(&path)
            .await
            .map_err(|e| LoadError::Discovery {
                dir: dir.display().to_string(),
                suffix,
                reason: format!("{:#}", e),
            })?;

        sources.push((base_name(&path), body));
    }

    Ok(sources)
}

// the cache key is the file's base name with the directory stripped
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
