use crate::config::TelarConfig;
use crate::domain::PageVars;
use crate::io::TemplateSource;
use crate::services::render::template_loader::{self, LoadError};
use crate::services::render::TemplateCache;
use derive_more::derive::{Display, Error};
use std::sync::Arc;
use tera::Context;

// per-request render failures. these never take the process down; the http
// boundary folds them into a generic 500 and keeps the detail in the logs
#[derive(Debug, Display, Error)]
pub enum RenderError {
    #[display("template {key} is not in the cache")]
    NotFound { key: String },

    #[display("template {key} failed to execute: {source}")]
    Execution { key: String, source: tera::Error },
}

// owns the template cache and is handed to request handlers through AppState,
// so tests can build one against a fake filesystem with no shared state
pub struct RenderService {
    cache: TemplateCache,
}

impl RenderService {
    // async because creation compiles every template into the internal cache.
    // once this returns Ok, every page the server can be asked for is present
    pub async fn boot(
        source: Box<dyn TemplateSource>,
        config: Arc<TelarConfig>,
    ) -> Result<Self, LoadError> {
        println!("Booting up and building the template cache...");

        let cache = TemplateCache::new();
        let loaded =
            template_loader::load_templates(source.as_ref(), &config.template_dir, &cache).await?;

        println!("Template cache built with {} pages.", loaded);

        Ok(Self { cache })
    }

    pub async fn render(&self, key: &str, vars: &PageVars) -> Result<String, RenderError> {
        let template = self
            .cache
            .get(key)
            .await
            .ok_or_else(|| RenderError::NotFound {
                key: key.to_string(),
            })?;

        let context = Context::from_serialize(vars).map_err(|e| RenderError::Execution {
            key: key.to_string(),
            source: e,
        })?;

        template.render(key, &context).map_err(|e| RenderError::Execution {
            key: key.to_string(),
            source: e,
        })
    }
}
