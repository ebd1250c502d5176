pub mod static_files;
pub mod templates;

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};

use crate::api::{ApiError, AppState};

pub use templates::PageTemplates;

pub fn create_frontend_router() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index))
        .merge(static_files::create_static_router())
}

async fn serve_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state
        .pages
        .render_index(state.store.list(), state.store.default_name())?;
    Ok(Html(html))
}
