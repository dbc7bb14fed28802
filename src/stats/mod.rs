// src/stats/mod.rs
// =============================================================================
// Counting repositories per primary language.
//
// Submodules:
// - tally: the ordered language -> count table and its display lines
// =============================================================================

mod tally;

pub use tally::{aggregate, LanguageTally, RepoStats};
