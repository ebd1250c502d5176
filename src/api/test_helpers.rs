use anyhow::Result;
use axum::Router;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::api::{create_router, AppState};
use crate::frontend::PageTemplates;
use crate::templates::TemplateStore;

pub const DEFAULT_TEMPLATE: &str = "Simple Horizontal Template";

/// Writes a small template set into a fresh directory.
///
/// The returned `TempDir` must be kept alive for as long as the store is used.
pub fn setup_template_dir() -> Result<TempDir> {
    let dir = tempfile::tempdir()?;

    write(
        dir.path(),
        "Simple Horizontal Template.html",
        r#"<div class="nametag horizontal"><img src="{{ logoUrl }}"><h2>{{ eventName }}</h2><p class="name">{{ firstName }} {{ lastName }}</p><p class="role">{{ role }}</p><p>{{ dates }} | {{ location }}</p></div>"#,
    )?;
    write(
        dir.path(),
        "Vertical.html",
        r#"<div class="nametag vertical"><p class="name">{{ lastName }}, {{ firstName }}</p><p class="role">{{ role }}</p></div>"#,
    )?;
    write(dir.path(), "Broken.html", "{% if firstName %}<p>never closed")?;
    write(dir.path(), "_shared.html", "<p>partial</p>")?;

    Ok(dir)
}

fn write(dir: &Path, file: &str, contents: &str) -> Result<()> {
    fs::write(dir.join(file), contents)?;
    Ok(())
}

pub fn create_test_state(dir: &Path) -> Result<AppState> {
    let store = TemplateStore::load(dir, DEFAULT_TEMPLATE)?;
    Ok(AppState::new(store, PageTemplates::new()?))
}

pub fn create_test_app() -> Result<(Router, TempDir)> {
    let dir = setup_template_dir()?;
    let app = create_router(create_test_state(dir.path())?);
    Ok((app, dir))
}

/// Router over the templates shipped in the repository.
pub fn create_bundled_app() -> Result<Router> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
    Ok(create_router(create_test_state(&dir)?))
}
