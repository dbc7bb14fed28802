// src/settings/mod.rs
// =============================================================================
// This module owns the JSON settings file that survives between runs.
//
// Submodules:
// - store: loading (never fails, but reports what happened) and saving
//
// The settings document is a plain JSON object. We keep it as a
// `serde_json::Map` rather than a typed struct because keys we don't know
// about must survive a load/save cycle untouched.
// =============================================================================

mod store;

pub use store::{load_settings, save_settings, RunRecord, SettingsLoad};
