// src/stats/tally.rs
// =============================================================================
// Builds the language tally from a list of repositories.
//
// Ordering rule:
//   - highest count first
//   - equal counts keep the order in which the language was first seen
//
// We get the second part for free: languages are pushed in first-seen order
// and `sort_by` is a stable sort.
// =============================================================================

use serde_json::{Map, Value};

use crate::github::Repository;

/// Shown instead of the language lines when no repository declares one
pub const NO_LANGUAGE_LINE: &str = "• Nenhuma linguagem detectada";

/// Language name -> repository count, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTally {
    entries: Vec<(String, usize)>,
}

impl LanguageTally {
    // Counts language names (empty names are skipped) and sorts the result
    pub fn from_languages<'a, I>(languages: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();

        for language in languages.into_iter().filter(|l| !l.is_empty()) {
            match entries.iter_mut().find(|(name, _)| name == language) {
                Some((_, count)) => *count += 1,
                None => entries.push((language.to_string(), 1)),
            }
        }

        // Stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        LanguageTally { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Sum of all counts
    pub fn counted(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    // One "• Language: N" line per entry, or the placeholder line
    pub fn display_lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![NO_LANGUAGE_LINE.to_string()];
        }

        self.entries
            .iter()
            .map(|(language, count)| format!("• {}: {}", language, count))
            .collect()
    }

    /// The tally as a JSON object, keys in display order
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(language, count)| (language.clone(), Value::from(*count)))
            .collect()
    }
}

/// Result of one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStats {
    /// Every repository, with or without a language
    pub total: usize,
    pub languages: LanguageTally,
}

pub fn aggregate(repos: &[Repository]) -> RepoStats {
    let languages = LanguageTally::from_languages(
        repos.iter().filter_map(|repo| repo.language.as_deref()),
    );

    RepoStats {
        total: repos.len(),
        languages,
    }
}
