// src/github/mod.rs
// =============================================================================
// This module lists the repositories of a GitHub account.
//
// Currently implements:
// - The `Repository` record (only the fields we actually read)
// - The `RepoSource` trait: "give me page N"
// - Paging through a source until it returns an empty page
// - `GitHubClient`: the real source, backed by the REST API
//
// Splitting "fetch one page" from "walk all pages" lets the pipeline tests
// plug in an in-memory source instead of the network.
// =============================================================================

mod client;
mod repos;

pub use client::GitHubClient;
pub use repos::{fetch_all_repositories, RepoSource, Repository};
