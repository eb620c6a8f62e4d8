use crate::domain::PageVars;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};

pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
}

async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_page(&state, "home.html.tmpl", PageVars::new("Home", "Home ")).await
}

async fn about_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_page(&state, "about.html.tmpl", PageVars::new("About", "About")).await
}

// a render failure of any kind comes back to the client as a bare 500;
// the detail stays in our logs
async fn render_page(
    state: &AppState,
    key: &str,
    vars: PageVars,
) -> Result<Html<String>, StatusCode> {
    match state.render_service.render(key, &vars).await {
        Ok(body) => Ok(Html(body)),
        Err(e) => {
            eprintln!("Error rendering {}: {}", key, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
