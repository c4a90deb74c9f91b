//! Configuration structures and loading logic.

use crate::config::modes::ProgressMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "SF_CONFIG_YML";

/// Config file used when neither the flag nor the env var is set.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Main configuration structure.
///
/// Keys are flat to stay compatible with existing `config.yml` files. Required
/// keys default to empty so that [`validate_config`](crate::config::validate_config)
/// can name the missing one instead of failing inside the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Salesforce login user name.
    #[serde(default)]
    pub sales_force_user_name: String,

    /// Password with the security token appended.
    #[serde(default)]
    pub sales_force_passwd_and_sec_token: String,

    /// Org host (e.g. `na1.salesforce.com`) or a full base URL.
    #[serde(default)]
    pub sales_force_site: String,

    /// Directory the export archives are written to.
    #[serde(default)]
    pub data_directory: PathBuf,

    /// SOAP partner login endpoint.
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Attempts per file before giving up on it.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Seconds to wait between attempts on the same file.
    #[serde(default)]
    pub retry_delay_seconds: u64,

    /// How download progress checkpoints are spaced.
    #[serde(default)]
    pub progress_mode: ProgressMode,

    /// Checkpoint spacing, in percent or seconds depending on the mode.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sales_force_user_name: String::new(),
            sales_force_passwd_and_sec_token: String::new(),
            sales_force_site: String::new(),
            data_directory: PathBuf::new(),
            login_url: default_login_url(),
            max_attempts: default_max_attempts(),
            retry_delay_seconds: 0,
            progress_mode: ProgressMode::default(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_login_url() -> String {
    "https://login.salesforce.com/services/Soap/u/28.0".to_string()
}

fn default_max_attempts() -> u32 {
    5
}

fn default_progress_interval() -> u64 {
    10
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from a YAML file, or TOML when the extension says so.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.yml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration in the format implied by the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_toml(path) {
            toml::to_string_pretty(self)
                .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }

    /// Config path to load, falling back to `config.yml` in the working directory.
    ///
    /// The `SF_CONFIG_YML` fallback is applied by the CLI before this is called.
    pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Base URL every export request is made against, without a trailing slash.
    pub fn site_base_url(&self) -> String {
        let site = self.sales_force_site.trim().trim_end_matches('/');
        if site.contains("://") {
            site.to_string()
        } else {
            format!("https://{}", site)
        }
    }
}
