// src/github/repos.rs
// =============================================================================
// Repository records and pagination.
//
// The listing endpoint returns at most PER_PAGE repositories per call. We ask
// for page 1, 2, 3, ... and stop at the first empty page. Any error aborts the
// whole walk: there are no partial results and no retries.
// =============================================================================

use anyhow::Result;
use serde::Deserialize;

/// Page size requested from the listing endpoint
pub const PER_PAGE: u32 = 100;

// One repository as returned by the API
//
// The API sends dozens of fields; serde ignores the ones not listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Primary language detected by GitHub; null for many repositories
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// Something that can hand out pages of repositories
pub trait RepoSource {
    /// Returns page `page` (1-based); an empty Vec means "no more pages"
    async fn fetch_page(&self, page: u32) -> Result<Vec<Repository>>;
}

// Walks every page of `source` and concatenates them in order
pub async fn fetch_all_repositories<S: RepoSource>(source: &S) -> Result<Vec<Repository>> {
    let mut repos = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.fetch_page(page).await?;
        if batch.is_empty() {
            break;
        }

        tracing::debug!("page {}: {} repositories", page, batch.len());
        repos.extend(batch);
        page += 1;
    }

    tracing::info!("fetched {} repositories in {} page(s)", repos.len(), page - 1);
    Ok(repos)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `async fn` inside a trait?
//    - Each implementor returns its own future type from fetch_page()
//    - We only ever use the trait through generics (`S: RepoSource`), never as
//      `dyn RepoSource`, so that's all we need
//
// 2. Why #[serde(default)]?
//    - The API may send `"language": null` or leave a field out entirely
//    - With `default`, a missing field becomes None / false instead of an error
//
// 3. What does `loop { ... break; }` do here?
//    - It's a "do until" loop: we don't know how many pages there are
//    - The first empty page ends it
// -----------------------------------------------------------------------------
