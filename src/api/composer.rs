//! Wraps a rendered nametag for the way it is going to be delivered.

use url::form_urlencoded;

use super::binder::NametagRequest;
use crate::frontend::PageTemplates;

/// How a rendered nametag is delivered to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Only the nametag markup.
    Bare,
    /// The nametag plus controls linking to the printable page, for htmx previews.
    Fragment,
    /// A standalone page sized to the badge that opens the print dialog.
    Printable,
}

impl DeliveryMode {
    /// Interactive clients always get a fragment, even when `printable` is set.
    pub fn select(interactive: bool, printable: bool) -> Self {
        if interactive {
            DeliveryMode::Fragment
        } else if printable {
            DeliveryMode::Printable
        } else {
            DeliveryMode::Bare
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Bare => "bare",
            DeliveryMode::Fragment => "fragment",
            DeliveryMode::Printable => "printable",
        }
    }
}

pub fn compose(
    pages: &PageTemplates,
    mode: DeliveryMode,
    request: &NametagRequest,
    nametag: String,
) -> Result<String, minijinja::Error> {
    match mode {
        DeliveryMode::Bare => Ok(nametag),
        DeliveryMode::Fragment => pages.render_fragment(&nametag, &printable_link(request)),
        DeliveryMode::Printable => pages.render_printable(&nametag, &request.fields),
    }
}

/// `/generate` URL that reproduces `request` as a printable page.
pub fn printable_link(request: &NametagRequest) -> String {
    let fields = &request.fields;
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("template", request.template.as_str())
        .append_pair("logoUrl", &fields.logo_url)
        .append_pair("eventName", &fields.event_name)
        .append_pair("firstName", &fields.first_name)
        .append_pair("lastName", &fields.last_name)
        .append_pair("role", &fields.role)
        .append_pair("dates", &fields.dates)
        .append_pair("location", &fields.location)
        .append_pair("printable", "true")
        .finish();

    format!("/generate?{query}")
}
