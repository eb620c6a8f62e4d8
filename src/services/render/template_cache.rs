use std::collections::HashMap;
use std::sync::Arc;
use tera::Tera;
use tokio::sync::Mutex;

// exists to hand compiled templates back to request handlers without touching
// the disk or the engine's parser again. every read and write goes through the
// one lock, so a handler never sees a half-written entry
pub struct TemplateCache {
    templates: Mutex<HashMap<String, Arc<Tera>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(HashMap::new()),
        }
    }

    // a miss is None, not an error; the caller decides what absence means
    pub async fn get(&self, key: &str) -> Option<Arc<Tera>> {
        let templates = self.templates.lock().await;
        templates.get(key).cloned()
    }

    // insert or overwrite, last write wins
    pub async fn set(&self, key: &str, template: Arc<Tera>) {
        let mut templates = self.templates.lock().await;
        templates.insert(key.to_string(), template);
    }

    pub async fn len(&self) -> usize {
        let templates = self.templates.lock().await;
        templates.len()
    }
}
