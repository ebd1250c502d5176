//! Nametag templates: discovery, lookup with fallback, and rendering.
//!
//! Templates are plain `.html` files in one directory. The file stem is the
//! template's name, so `Simple Horizontal Template.html` is selected with
//! `template=Simple Horizontal Template`. Placeholders use the camelCase field
//! names (`{{ firstName }}`, `{{ logoUrl }}`, ...).

mod error;
mod renderer;
mod store;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

pub use error::TemplateError;
pub use renderer::Renderer;
pub use store::{Template, TemplateStore, TEMPLATE_EXTENSION};

/// Name of a template as shown in the selection control and accepted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TemplateName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TemplateName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The seven attendee/event values interpolated into a nametag.
///
/// Every field is opaque text and may be empty. Serialized names are the
/// camelCase names used by the form, the JSON API and template placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NametagFields {
    pub logo_url: String,
    pub event_name: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub dates: String,
    pub location: String,
}
