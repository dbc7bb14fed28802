// src/report/mod.rs
// =============================================================================
// Everything that ends up in the README.
//
// Submodules:
// - schedule: next-update strategies and their display text
// - block: renders the marker-delimited info block
// - readme: merges a block into existing README content
// =============================================================================

mod block;
mod readme;
mod schedule;

pub use block::{render_block, ReportBlock};
pub use readme::merge_block;
pub use schedule::Schedule;
