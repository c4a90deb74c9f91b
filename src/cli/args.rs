//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ProgressMode, CONFIG_ENV_VAR};

/// Salesforce weekly export downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "salesforce-backup",
    version,
    about = "Download Salesforce weekly data export archives",
    long_about = "Logs in to Salesforce, reads the data export index and downloads every\n\
                  archive into the data directory.\n\n\
                  Archives already on disk with the expected size are skipped, so re-running\n\
                  after an interruption resumes where the last run stopped."
)]
pub struct Args {
    /// Path to configuration file (YAML, or TOML by extension).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Salesforce user name.
    #[arg(short, long, env = "SF_USER_NAME")]
    pub user: Option<String>,

    /// Password with the security token appended.
    #[arg(short, long, env = "SF_PASSWD_AND_SEC_TOKEN", hide_env_values = true)]
    pub password: Option<String>,

    /// Org host, e.g. na1.salesforce.com.
    #[arg(short, long)]
    pub site: Option<String>,

    /// Directory to store the archives in.
    #[arg(short = 'd', long = "directory")]
    pub data_directory: Option<PathBuf>,

    /// SOAP login endpoint.
    #[arg(long)]
    pub login_url: Option<String>,

    /// Attempts per file before moving on.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seconds to wait between attempts on the same file.
    #[arg(long = "retry-delay")]
    pub retry_delay: Option<u64>,

    /// How progress checkpoints are spaced.
    #[arg(long, value_enum)]
    pub progress_mode: Option<ProgressModeArg>,

    /// Checkpoint spacing in percent or seconds.
    #[arg(long)]
    pub progress_interval: Option<u64>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI progress mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressModeArg {
    /// Every N percent.
    Percentage,
    /// Every N seconds.
    Seconds,
}

impl From<ProgressModeArg> for ProgressMode {
    fn from(arg: ProgressModeArg) -> Self {
        match arg {
            ProgressModeArg::Percentage => ProgressMode::Percentage,
            ProgressModeArg::Seconds => ProgressMode::Seconds,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(user) = self.user {
            config.sales_force_user_name = user;
        }

        if let Some(password) = self.password {
            config.sales_force_passwd_and_sec_token = password;
        }

        if let Some(site) = self.site {
            config.sales_force_site = site;
        }

        if let Some(dir) = self.data_directory {
            config.data_directory = dir;
        }

        if let Some(login_url) = self.login_url {
            config.login_url = login_url;
        }

        if let Some(attempts) = self.max_attempts {
            config.max_attempts = attempts;
        }

        if let Some(delay) = self.retry_delay {
            config.retry_delay_seconds = delay;
        }

        if let Some(mode) = self.progress_mode {
            config.progress_mode = mode.into();
        }

        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }
    }
}
