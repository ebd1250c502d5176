use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub templates: TemplateSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    #[serde(default = "default_cors_origin")]
    pub cors_allow_origin: String,
    #[serde(default = "default_cors_methods")]
    pub cors_allow_methods: String,
    #[serde(default = "default_cors_headers")]
    pub cors_allow_headers: String,
}

// Default functions for CORS settings
fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_cors_methods() -> String {
    "GET, POST, OPTIONS".to_string()
}

fn default_cors_headers() -> String {
    "Content-Type, Authorization, HX-Request, HX-Target, HX-Trigger, HX-Current-URL".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSettings {
    #[serde(default = "default_template_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_template_name")]
    pub default_template: String,
}

fn default_template_directory() -> PathBuf {
    PathBuf::from("templates")
}

fn default_template_name() -> String {
    "Simple Horizontal Template".to_string()
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            directory: default_template_directory(),
            default_template: default_template_name(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(Environment::default().separator("__"))
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            // The bare PORT variable wins over everything else, as most hosts only set that one
            .set_override_option("application.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}
