pub mod api;
pub mod config;
pub mod frontend;
pub mod metrics;
pub mod templates;

pub use api::{create_router, ApiError, AppState};
pub use config::Settings;
pub use frontend::PageTemplates;
pub use templates::{NametagFields, Renderer, Template, TemplateName, TemplateStore};
