use std::path::PathBuf;
use thiserror::Error;

use super::TemplateName;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read template file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Default template '{name}' not found in {directory}")]
    MissingDefault { name: TemplateName, directory: PathBuf },
    #[error("Failed to render template '{name}': {source}")]
    Render {
        name: TemplateName,
        #[source]
        source: minijinja::Error,
    },
}
