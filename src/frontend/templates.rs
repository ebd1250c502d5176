use minijinja::{context, AutoEscape, Environment};

use crate::templates::{NametagFields, TemplateName};

const INDEX: &str = "index.html";
const FRAGMENT: &str = "fragment.html";
const PRINTABLE: &str = "printable.html";

/// Page chrome around the nametags: the home page and the wrappers used for
/// interactive previews and print pages.
///
/// These are compiled into the binary and parsed once. Like nametag templates
/// they escape every interpolated value; the already rendered nametag is the
/// only value marked safe.
pub struct PageTemplates {
    env: Environment<'static>,
}

impl PageTemplates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(INDEX, include_str!("templates/index.html"))?;
        env.add_template(FRAGMENT, include_str!("templates/fragment.html"))?;
        env.add_template(PRINTABLE, include_str!("templates/printable.html"))?;
        Ok(Self { env })
    }

    pub fn render_index(
        &self,
        templates: &[TemplateName],
        default_template: &TemplateName,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX)?.render(context! {
            templates => templates,
            default_template => default_template,
        })
    }

    /// Interactive preview: the nametag followed by print controls.
    pub fn render_fragment(&self, nametag: &str, print_url: &str) -> Result<String, minijinja::Error> {
        self.env.get_template(FRAGMENT)?.render(context! {
            nametag => nametag,
            print_url => print_url,
        })
    }

    /// Standalone page sized to the badge that opens the print dialog on load.
    pub fn render_printable(
        &self,
        nametag: &str,
        fields: &NametagFields,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(PRINTABLE)?.render(context! {
            nametag => nametag,
            fields => fields,
        })
    }
}
