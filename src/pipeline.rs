// src/pipeline.rs
// =============================================================================
// One run of the tool, start to finish:
//
//   1. load the previous settings (never fails)
//   2. fetch every repository page
//   3. count repositories per language
//   4. render the block, merge it into the README, save settings + README
//
// All writes happen at the very end, after the fetch succeeded and the README
// was read, so a failure in any earlier step leaves both files untouched.
// Both files are rewritten from the same `RepoStats`, so they always agree.
// =============================================================================

use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::github::{fetch_all_repositories, RepoSource};
use crate::report::{merge_block, render_block, ReportBlock};
use crate::settings::{load_settings, save_settings, RunRecord, SettingsLoad};
use crate::stats::{aggregate, RepoStats};

/// Printed when the kill switch is off
pub const DISABLED_NOTICE: &str = "⏸️ Script temporariamente desativado";

const LAST_UPDATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug)]
pub enum Outcome {
    /// Kill switch off: nothing fetched, nothing written
    Disabled,
    Updated(RepoStats),
}

pub async fn run<S: RepoSource>(config: &Config, source: &S, now: DateTime<Utc>) -> Result<Outcome> {
    // Kill switch: no request, no file access
    if !config.enabled {
        return Ok(Outcome::Disabled);
    }

    // Stage 1: previous settings
    let load = load_settings(&config.settings_path);
    match &load {
        SettingsLoad::Absent => {
            tracing::debug!("no settings at {}, starting empty", config.settings_path.display())
        }
        SettingsLoad::Unparseable(e) => {
            tracing::debug!("ignoring {}: {}", config.settings_path.display(), e)
        }
        SettingsLoad::Loaded(settings) => {
            tracing::debug!("loaded {} settings key(s)", settings.len())
        }
    }
    let mut settings = load.into_settings();

    // Stage 2: repositories
    // Any fetch error returns here, before anything is written
    let mut repos = fetch_all_repositories(source).await?;
    if config.skip_forks {
        let before = repos.len();
        repos.retain(|repo| !repo.fork);
        tracing::info!("skipped {} fork(s)", before - repos.len());
    }

    // Stage 3: counts
    let stats = aggregate(&repos);
    tracing::info!(
        "{} repositories, {} language(s)",
        stats.total,
        stats.languages.entries().len()
    );

    // Stage 4: render and write
    // Every displayed time is in the configured fixed offset
    let local_now = now.with_timezone(&config.offset);
    let last_update = local_now.format(LAST_UPDATE_FORMAT).to_string();
    let next_update = config
        .schedule
        .next_update(local_now)
        .map(|next| next.to_string());

    let language_lines = stats.languages.display_lines();
    let cadence_line = config.schedule.cadence_line();
    let block = render_block(&ReportBlock {
        total: stats.total,
        language_lines: &language_lines,
        cadence_line: &cadence_line,
        next_update: next_update.as_deref(),
        last_update: &last_update,
        tz_label: &config.tz_label,
    });

    // Read the README before writing anything, so a missing README
    // leaves the settings file untouched too
    let readme = fs::read_to_string(&config.readme_path)
        .with_context(|| format!("Failed to read {}", config.readme_path.display()))?;
    let readme = merge_block(&readme, &block);

    RunRecord {
        username: &config.user,
        total_projects: stats.total,
        languages: &stats.languages,
        last_update: &last_update,
        next_update: next_update.as_deref(),
        updated_by: config.trigger.as_str(),
    }
    .apply_to(&mut settings);

    // Whole-file overwrites, settings first
    save_settings(&config.settings_path, &settings)?;
    tracing::info!("wrote {}", config.settings_path.display());

    fs::write(&config.readme_path, readme)
        .with_context(|| format!("Failed to write {}", config.readme_path.display()))?;
    tracing::info!("wrote {}", config.readme_path.display());

    Ok(Outcome::Updated(stats))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is <S: RepoSource>?
//    - A generic parameter: run() works with ANY type implementing RepoSource
//    - main passes a GitHubClient; the tests pass an in-memory FixtureSource
//    - The compiler generates one copy of run() per source type
//
// 2. Why take `now` as a parameter instead of calling Utc::now() here?
//    - The tests pass a fixed instant, so timestamps in the output are known
//
// 3. What is .as_deref()?
//    - Turns Option<String> into Option<&str> without moving the String
//    - Lets the same next_update value feed both the block and the settings
//
// 4. What is the `match &load { ... }` followed by load.into_settings()?
//    - Matching on a reference only looks at the value (for logging)
//    - into_settings() then consumes it; both steps need the same `load`
// -----------------------------------------------------------------------------
