use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use std::time::Instant;
use tracing::debug;

use super::binder::{self, GenerateFlags, NametagRequest};
use super::composer::{self, DeliveryMode};
use super::types::{ApiError, AppState, HealthStatus, TemplateListing};

/// Header htmx sets on every request it issues.
const HX_REQUEST: &str = "HX-Request";

fn is_interactive(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == "true")
}

fn render_nametag(
    state: &AppState,
    mode: DeliveryMode,
    request: &NametagRequest,
) -> Result<Html<String>, ApiError> {
    let started = Instant::now();

    let template = state.store.load_template(request.template.as_str());
    let nametag = state.renderer.render(template, &request.fields)?;
    let html = composer::compose(&state.pages, mode, request, nametag)?;

    crate::metrics::record_nametag_rendered(mode.as_str(), started.elapsed());
    debug!(
        "Rendered nametag with template '{}' as {}",
        template.name(),
        mode.as_str()
    );

    Ok(Html(html))
}

/// `GET`/`POST /generate`: form fields in, nametag HTML out.
pub async fn generate(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>, ApiError> {
    let request = binder::bind_form(query.as_deref(), &body, state.store.default_name())?;
    let flags = GenerateFlags::from_query(query.as_deref());
    let mode = DeliveryMode::select(is_interactive(&headers), flags.printable);

    render_nametag(&state, mode, &request)
}

/// `POST /api/generate`: JSON fields in, bare nametag HTML out.
pub async fn api_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, ApiError> {
    let request = binder::bind_json(&body, state.store.default_name())?;
    render_nametag(&state, DeliveryMode::Bare, &request)
}

pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListing> {
    Json(TemplateListing {
        templates: state.store.list().to_vec(),
        default: state.store.default_name().clone(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        templates: state.store.len(),
    })
}
