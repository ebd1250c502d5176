use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::debug;
use url::{ParseError, Url};

use super::{NametagFields, Template, TemplateError};

/// Renders nametag templates with HTML auto-escaping forced on for every
/// template, whatever its name.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        Self { env }
    }

    pub fn render(&self, template: &Template, fields: &NametagFields) -> Result<String, TemplateError> {
        let context = NametagFields {
            logo_url: safe_logo_url(&fields.logo_url),
            ..fields.clone()
        };

        self.env
            .render_named_str(template.name().as_str(), template.source(), &context)
            .map_err(|source| TemplateError::Render {
                name: template.name().clone(),
                source,
            })
    }
}

/// Keeps `logoUrl` only when it is relative or uses http(s); anything else
/// (`javascript:`, `data:`, ...) renders as empty, which hides the logo.
fn safe_logo_url(raw: &str) -> String {
    let allowed = match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    };

    if allowed {
        raw.to_string()
    } else {
        debug!("Dropping logo URL with disallowed scheme or syntax");
        String::new()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> NametagFields {
        NametagFields {
            logo_url: "https://example.com/logo.png".to_string(),
            event_name: "Annual Conference 2025".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role: "Speaker".to_string(),
            dates: "21 - 22 August 2025".to_string(),
            location: "Nairobi, Kenya".to_string(),
        }
    }

    #[test]
    fn substitutes_every_field() {
        let template = Template::new(
            "t".into(),
            "{{ logoUrl }}|{{ eventName }}|{{ firstName }}|{{ lastName }}|{{ role }}|{{ dates }}|{{ location }}",
        );

        let mut fields = fields();
        fields.logo_url = "logo.png".to_string();

        let html = Renderer::new().render(&template, &fields).unwrap();
        assert_eq!(
            html,
            "logo.png|Annual Conference 2025|Jane|Doe|Speaker|21 - 22 August 2025|Nairobi, Kenya"
        );
    }

    #[test]
    fn escapes_markup_in_text_and_attributes() {
        let template = Template::new(
            "t".into(),
            r#"<img src="{{ logoUrl }}"><h1>{{ eventName }}</h1>"#,
        );
        let mut fields = fields();
        fields.logo_url = r#"x" onerror="alert(1)"#.to_string();
        fields.event_name = "<script>alert('x')</script> & co".to_string();

        let html = Renderer::new().render(&template, &fields).unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains(r#"" onerror"#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; co"));
        assert!(html.contains("&quot; onerror"));
    }

    #[test]
    fn logo_url_keeps_only_http_and_relative() {
        let template = Template::new("t".into(), r#"[{{ logoUrl }}]"#);
        let renderer = Renderer::new();
        let mut fields = fields();

        for rejected in [
            "javascript:alert(1)",
            " JavaScript:alert(1)",
            "java\tscript:alert(1)",
            "data:image/svg+xml;base64,PHN2Zz4=",
            "vbscript:msgbox",
        ] {
            fields.logo_url = rejected.to_string();
            assert_eq!(renderer.render(&template, &fields).unwrap(), "[]", "{rejected}");
        }

        for kept in ["https://example.com/logo.png", "http://example.com/a.png", "logo.png", "img/logo.png"] {
            fields.logo_url = kept.to_string();
            let html = renderer.render(&template, &fields).unwrap();
            assert_ne!(html, "[]", "{kept}");
            assert!(html.contains("logo") || html.contains("a.png"), "{kept}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let template = Template::new("t".into(), "<p>{{ firstName }} {{ lastName }}</p>");
        let renderer = Renderer::new();
        let first = renderer.render(&template, &fields()).unwrap();
        let second = renderer.render(&template, &fields()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn undefined_placeholders_render_empty() {
        let template = Template::new("t".into(), "[{{ nickname }}]");
        let html = Renderer::new().render(&template, &fields()).unwrap();
        assert_eq!(html, "[]");
    }

    #[test]
    fn malformed_template_is_a_render_error() {
        let template = Template::new("Broken".into(), "{% if firstName %}<p>unclosed");
        let err = Renderer::new().render(&template, &fields()).unwrap_err();
        match err {
            TemplateError::Render { name, .. } => assert_eq!(name.as_str(), "Broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
