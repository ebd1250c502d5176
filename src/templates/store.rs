use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{TemplateError, TemplateName};

pub const TEMPLATE_EXTENSION: &str = "html";

/// Immutable template source keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: TemplateName,
    source: String,
}

impl Template {
    pub fn new(name: TemplateName, source: impl Into<String>) -> Self {
        Self {
            name,
            source: source.into(),
        }
    }

    pub fn name(&self) -> &TemplateName {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Every template found in the template directory, read once at startup.
#[derive(Debug)]
pub struct TemplateStore {
    directory: PathBuf,
    names: Vec<TemplateName>,
    templates: HashMap<TemplateName, Template>,
    default_name: TemplateName,
}

impl TemplateStore {
    /// Reads every `*.html` file in `directory` that does not start with `_`.
    ///
    /// Fails when the directory cannot be read or when `default_name` is not
    /// among the discovered templates. The service cannot work without its
    /// default template, so callers treat this as fatal.
    pub fn load(
        directory: impl AsRef<Path>,
        default_name: impl Into<TemplateName>,
    ) -> Result<Self, TemplateError> {
        let directory = directory.as_ref().to_path_buf();
        let default_name = default_name.into();

        let entries = fs::read_dir(&directory).map_err(|source| TemplateError::ReadDir {
            path: directory.clone(),
            source,
        })?;

        let mut templates = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| TemplateError::ReadDir {
                path: directory.clone(),
                source,
            })?;
            let path = entry.path();

            let Some(name) = template_name_for(&path) else {
                debug!("Skipping non-template entry {}", path.display());
                continue;
            };

            let source = fs::read_to_string(&path).map_err(|source| TemplateError::ReadFile {
                path: path.clone(),
                source,
            })?;
            templates.insert(name.clone(), Template::new(name, source));
        }

        Self::from_templates(directory, templates.into_values(), default_name)
    }

    /// Builds a store from templates already in memory.
    pub fn from_templates(
        directory: PathBuf,
        templates: impl IntoIterator<Item = Template>,
        default_name: TemplateName,
    ) -> Result<Self, TemplateError> {
        let templates: HashMap<TemplateName, Template> = templates
            .into_iter()
            .map(|template| (template.name.clone(), template))
            .collect();

        if !templates.contains_key(&default_name) {
            return Err(TemplateError::MissingDefault {
                name: default_name,
                directory,
            });
        }

        let mut names: Vec<TemplateName> = templates.keys().cloned().collect();
        names.sort();

        info!(
            "Loaded {} nametag templates from {} (default: {})",
            names.len(),
            directory.display(),
            default_name
        );

        Ok(Self {
            directory,
            names,
            templates,
            default_name,
        })
    }

    pub fn list(&self) -> &[TemplateName] {
        &self.names
    }

    pub fn default_name(&self) -> &TemplateName {
        &self.default_name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Looks up `name`, falling back to the default template when it is unknown.
    pub fn load_template(&self, name: &str) -> &Template {
        if let Some(template) = self.templates.get(name) {
            return template;
        }

        warn!(
            "Template '{}' not found, falling back to '{}'",
            name, self.default_name
        );
        crate::metrics::record_template_fallback();

        // Presence of the default is checked when the store is built.
        &self.templates[&self.default_name]
    }
}

fn template_name_for(path: &Path) -> Option<TemplateName> {
    if !path.is_file() {
        return None;
    }
    if path.extension()? != TEMPLATE_EXTENSION {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.starts_with('_') {
        return None;
    }

    Some(TemplateName::new(stem))
}
