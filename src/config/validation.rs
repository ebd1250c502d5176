use anyhow::{anyhow, Result};

pub fn validate_template_settings(settings: &crate::config::Settings) -> Result<()> {
    if settings.templates.default_template.trim().is_empty() {
        return Err(anyhow!("templates.default_template must not be empty"));
    }

    if !settings.templates.directory.is_dir() {
        return Err(anyhow!(
            "Template directory {} does not exist or is not a directory",
            settings.templates.directory.display()
        ));
    }

    Ok(())
}

pub fn validate_application_settings(settings: &crate::config::Settings) -> Result<()> {
    if settings.application.port == 0 {
        return Err(anyhow!("application.port must be greater than 0"));
    }

    settings
        .application
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|e| anyhow!("Invalid application.host {}: {}", settings.application.host, e))?;

    Ok(())
}
