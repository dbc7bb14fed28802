// src/settings/store.rs
// =============================================================================
// Loading and saving the settings JSON document.
//
// Loading is total: a missing file, unreadable bytes, broken JSON and JSON
// that isn't an object all end up as an empty document. We still tell the
// caller WHICH of those happened (`SettingsLoad`) so it can log it.
//
// Saving writes the whole file at once, pretty-printed with 2-space
// indentation. serde_json never escapes non-ASCII characters, so names like
// "Horário" are written literally.
// =============================================================================

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::stats::LanguageTally;

/// The persisted settings document: a JSON object
pub type Settings = Map<String, Value>;

/// Why an existing settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings file holds a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

/// Outcome of loading the settings file
#[derive(Debug)]
pub enum SettingsLoad {
    /// No file at the given path
    Absent,
    /// A file exists but doesn't hold a JSON object
    Unparseable(SettingsError),
    /// A JSON object was read
    Loaded(Settings),
}

impl SettingsLoad {
    /// Collapses every outcome into a document, empty unless `Loaded`
    pub fn into_settings(self) -> Settings {
        match self {
            SettingsLoad::Loaded(settings) => settings,
            SettingsLoad::Absent | SettingsLoad::Unparseable(_) => Settings::new(),
        }
    }
}

// Reads the settings file at `path`
//
// Never fails; see `SettingsLoad` for the possible outcomes.
pub fn load_settings(path: &Path) -> SettingsLoad {
    if !path.exists() {
        return SettingsLoad::Absent;
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => return SettingsLoad::Unparseable(e.into()),
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(settings)) => SettingsLoad::Loaded(settings),
        Ok(other) => SettingsLoad::Unparseable(SettingsError::NotAnObject(json_kind(&other))),
        Err(e) => SettingsLoad::Unparseable(e.into()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Writes the settings document to `path`, creating parent directories
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// The fields one run writes into the settings document
#[derive(Debug)]
pub struct RunRecord<'a> {
    pub username: &'a str,
    pub total_projects: usize,
    pub languages: &'a LanguageTally,
    pub last_update: &'a str,
    pub next_update: Option<&'a str>,
    pub updated_by: &'a str,
}

impl RunRecord<'_> {
    // Shallow update: each key is replaced as a whole, every other key is left alone
    pub fn apply_to(&self, settings: &mut Settings) {
        settings.insert("username".into(), Value::from(self.username));
        settings.insert("total_projects".into(), Value::from(self.total_projects));
        settings.insert("languages".into(), Value::Object(self.languages.to_json()));
        settings.insert("last_update".into(), Value::from(self.last_update));

        // A stale next_update would contradict the README block
        match self.next_update {
            Some(next) => {
                settings.insert("next_update".into(), Value::from(next));
            }
            None => {
                settings.shift_remove("next_update");
            }
        }

        settings.insert("updated_by".into(), Value::from(self.updated_by));
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return an enum instead of Result?
//    - Loading must never stop the run, so there is no error to propagate
//    - The enum still says what happened, which is handy for logging
//
// 2. What is #[from] in the thiserror enum?
//    - It generates `From<io::Error> for SettingsError`, so `e.into()` works
//
// 3. What is the 'a in RunRecord<'a>?
//    - RunRecord only borrows strings owned by the caller
//    - The lifetime says it can't outlive them
// -----------------------------------------------------------------------------
