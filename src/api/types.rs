use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use super::binder::BindError;
use crate::frontend::PageTemplates;
use crate::templates::{Renderer, TemplateError, TemplateName, TemplateStore};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TemplateStore>,
    pub renderer: Arc<Renderer>,
    pub pages: Arc<PageTemplates>,
}

impl AppState {
    pub fn new(store: TemplateStore, pages: PageTemplates) -> Self {
        Self {
            store: Arc::new(store),
            renderer: Arc::new(Renderer::new()),
            pages: Arc::new(pages),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(#[from] BindError),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Page rendering error: {0}")]
    Page(#[from] minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(ref e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Template(ref e) => {
                error!("Error generating nametag: {}", e);
                crate::metrics::record_render_error();
                (StatusCode::INTERNAL_SERVER_ERROR, "Error generating nametag".to_string())
            }
            ApiError::Page(ref e) => {
                error!("Error rendering page: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering page".to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateListing {
    pub templates: Vec<TemplateName>,
    pub default: TemplateName,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub templates: usize,
}
