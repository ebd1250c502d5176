mod settings;
pub mod validation;

pub use settings::{ApplicationSettings, Settings, TemplateSettings};
pub use validation::{validate_application_settings, validate_template_settings};
