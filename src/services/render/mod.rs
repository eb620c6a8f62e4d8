pub mod render_service;
pub mod template_cache;
pub mod template_loader;

pub use self::render_service::{RenderError, RenderService};
pub use self::template_cache::TemplateCache;
pub use self::template_loader::LoadError;
