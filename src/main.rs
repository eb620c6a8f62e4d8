use crate::config::TelarConfig;
use crate::features::pages::pages_router;
use crate::io::local::LocalTemplateSource;
use crate::services::render::RenderService;
use anyhow::Context;
use std::sync::Arc;

pub mod config;
mod domain;
mod features;
mod io;
mod services;


#[derive(Clone)]
pub struct AppState {
    pub render_service: Arc<RenderService>,
    pub config: Arc<TelarConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = Arc::new(TelarConfig::from_env());

    // compile every template up front. serving with a partial cache is unsafe,
    // so a loader failure aborts startup before we ever bind the listener
    let render_service = RenderService::boot(Box::new(LocalTemplateSource), config.clone())
        .await
        .context("Failed to build the template cache")?;

    let app_state = AppState {
        render_service: Arc::new(render_service),
        config: config.clone(),
    };

    println!("Starting server...");

    let app = pages_router().with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    println!("Server listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
