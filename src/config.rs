// src/config.rs
// =============================================================================
// The explicit configuration value handed to the pipeline.
//
// `Config` is built from the parsed command line and validated once, up front:
// bad hours, a bad offset or a bad API URL stop the run before any request is
// made or any file is opened. Tests build a `Config` directly and point the
// paths at a temporary directory.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::FixedOffset;
use url::Url;

use crate::cli::{Cli, ScheduleKind, Trigger};
use crate::report::Schedule;

#[derive(Debug, Clone)]
pub struct Config {
    /// Kill switch; when false the pipeline does nothing
    pub enabled: bool,
    pub user: String,
    pub readme_path: PathBuf,
    pub settings_path: PathBuf,
    pub token: Option<String>,
    /// Always ends with '/', so relative joins append to it
    pub api_url: Url,
    pub timeout: Duration,
    pub schedule: Schedule,
    pub offset: FixedOffset,
    pub tz_label: String,
    pub trigger: Trigger,
    pub skip_forks: bool,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let user = cli.user.trim().to_string();
        if user.is_empty() {
            bail!("--user must not be empty");
        }

        let schedule = match cli.schedule {
            ScheduleKind::Paused => Schedule::Paused,
            ScheduleKind::Window => Schedule::window(),
            ScheduleKind::Slots => Schedule::slots(cli.slot_hours)?,
        };

        Ok(Config {
            enabled: !cli.disabled,
            user,
            readme_path: PathBuf::from(cli.readme),
            settings_path: PathBuf::from(cli.settings),
            // An empty GITHUB_TOKEN (common in CI) means "no token"
            token: cli.token.filter(|t| !t.trim().is_empty()),
            api_url: parse_api_url(&cli.api_url)?,
            timeout: Duration::from_secs(cli.timeout),
            schedule,
            offset: parse_offset(cli.utc_offset)?,
            tz_label: cli.tz_label,
            trigger: cli.trigger,
            skip_forks: cli.skip_forks,
        })
    }
}

#[cfg(test)]
impl Config {
    // Defaults for tests, with both files placed under `root`
    pub fn for_test(root: &std::path::Path) -> Self {
        Config {
            enabled: true,
            user: "octocat".to_string(),
            readme_path: root.join("README.md"),
            settings_path: root.join(".github").join("settings.json"),
            token: None,
            api_url: Url::parse("https://api.github.com/").expect("static URL"),
            timeout: Duration::from_secs(5),
            schedule: Schedule::window(),
            offset: FixedOffset::west_opt(3 * 3600).expect("static offset"),
            tz_label: "Horário de Brasília".to_string(),
            trigger: Trigger::Manual,
            skip_forks: false,
        }
    }
}

// Parses the API base URL and makes sure it ends with a slash
//
// Example:
//   "https://ghe.example.com/api/v3" -> "https://ghe.example.com/api/v3/"
fn parse_api_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).with_context(|| format!("Invalid API URL: {}", raw))?;

    if url.cannot_be_a_base() {
        bail!("API URL cannot be used as a base: {}", raw);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn parse_offset(hours: i32) -> Result<FixedOffset> {
    if !(-23..=23).contains(&hours) {
        bail!("UTC offset must be between -23 and 23 hours, got {}", hours);
    }
    FixedOffset::east_opt(hours * 3600).ok_or_else(|| anyhow!("Invalid UTC offset: {}", hours))
}
