//! Turns form-encoded or JSON request data into a [`NametagRequest`].

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use url::form_urlencoded;

use crate::templates::{NametagFields, TemplateName};

#[derive(Error, Debug)]
pub enum BindError {
    #[error("Invalid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Error parsing form: {0}")]
    MalformedForm(String),
}

/// A template selection plus the values to put in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NametagRequest {
    pub template: TemplateName,
    pub fields: NametagFields,
}

/// Options of `/generate` that only come from the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateFlags {
    pub printable: bool,
}

impl GenerateFlags {
    pub fn from_query(query: Option<&str>) -> Self {
        let printable = query
            .and_then(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "printable")
                    .map(|(_, value)| value == "true")
            })
            .unwrap_or(false);

        Self { printable }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFields {
    template: Option<String>,
    logo_url: Option<String>,
    event_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<String>,
    dates: Option<String>,
    location: Option<String>,
}

impl WireFields {
    fn into_request(self, default_template: &TemplateName) -> NametagRequest {
        let template = self
            .template
            .filter(|name| !name.is_empty())
            .map(TemplateName::from)
            .unwrap_or_else(|| default_template.clone());

        NametagRequest {
            template,
            fields: NametagFields {
                logo_url: self.logo_url.unwrap_or_default(),
                event_name: self.event_name.unwrap_or_default(),
                first_name: self.first_name.unwrap_or_default(),
                last_name: self.last_name.unwrap_or_default(),
                role: self.role.unwrap_or_default(),
                dates: self.dates.unwrap_or_default(),
                location: self.location.unwrap_or_default(),
            },
        }
    }
}

impl From<HashMap<String, String>> for WireFields {
    fn from(mut pairs: HashMap<String, String>) -> Self {
        WireFields {
            template: pairs.remove("template"),
            logo_url: pairs.remove("logoUrl"),
            event_name: pairs.remove("eventName"),
            first_name: pairs.remove("firstName"),
            last_name: pairs.remove("lastName"),
            role: pairs.remove("role"),
            dates: pairs.remove("dates"),
            location: pairs.remove("location"),
        }
    }
}

/// Every `%` must start a two-digit hex escape.
fn check_percent_escapes(input: &[u8]) -> Result<(), BindError> {
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'%' {
            match input.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => {
                    return Err(BindError::MalformedForm(format!(
                        "invalid percent escape at byte {i}"
                    )))
                }
            }
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Binds URL-encoded fields from the query string and the request body.
///
/// When a key repeats, its first value is used. Body values take precedence
/// over query values for the same field.
pub fn bind_form(
    query: Option<&str>,
    body: &[u8],
    default_template: &TemplateName,
) -> Result<NametagRequest, BindError> {
    let query = query.unwrap_or_default().as_bytes();
    check_percent_escapes(body)?;
    check_percent_escapes(query)?;

    let mut pairs: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(body).chain(form_urlencoded::parse(query)) {
        pairs.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }

    Ok(WireFields::from(pairs).into_request(default_template))
}

/// Binds a JSON object using the same camelCase field names as the form.
///
/// A bare `null` binds like an empty object.
pub fn bind_json(body: &[u8], default_template: &TemplateName) -> Result<NametagRequest, BindError> {
    let wire: Option<WireFields> = serde_json::from_slice(body)?;
    Ok(wire.unwrap_or_default().into_request(default_template))
}
