//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_required("sales_force_user_name", &config.sales_force_user_name)?;
    validate_required(
        "sales_force_passwd_and_sec_token",
        &config.sales_force_passwd_and_sec_token,
    )?;
    validate_required("sales_force_site", &config.sales_force_site)?;
    validate_required(
        "data_directory",
        &config.data_directory.to_string_lossy(),
    )?;

    validate_site(config)?;
    validate_login_url(&config.login_url)?;

    if config.max_attempts == 0 {
        return Err(Error::ConfigValidation {
            field: "max_attempts".to_string(),
            message: "Must allow at least one attempt per file".to_string(),
        });
    }

    if config.progress_interval == 0 {
        return Err(Error::ConfigValidation {
            field: "progress_interval".to_string(),
            message: "Progress interval must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// A required key must be present, non-blank and not a placeholder.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    let lower = value.to_lowercase();
    if lower.contains("replaceme") || lower.starts_with("your_") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' appears to be a placeholder", value),
        });
    }

    Ok(())
}

/// The site must form a valid http(s) base URL.
pub fn validate_site(config: &Config) -> Result<()> {
    let base = config.site_base_url();
    let url = Url::parse(&base).map_err(|e| Error::ConfigValidation {
        field: "sales_force_site".to_string(),
        message: format!("'{}' is not a usable host: {}", config.sales_force_site, e),
    })?;

    if url.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "sales_force_site".to_string(),
            message: format!("'{}' has no host", config.sales_force_site),
        });
    }

    Ok(())
}

/// Validate the SOAP login endpoint.
pub fn validate_login_url(login_url: &str) -> Result<()> {
    let url = Url::parse(login_url).map_err(|e| Error::ConfigValidation {
        field: "login_url".to_string(),
        message: format!("'{}': {}", login_url, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ConfigValidation {
            field: "login_url".to_string(),
            message: format!("Unsupported scheme '{}'", other),
        }),
    }
}
