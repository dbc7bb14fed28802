// src/report/readme.rs
// =============================================================================
// Merges a rendered block into README content.
//
// - If a START ... END region exists, the FIRST one is replaced (markers
//   included) and every other byte is left as is.
// - Otherwise the block is appended after exactly one blank line.
//
// The match is non-greedy and spans newlines, so text after the first END
// marker is never swallowed.
// =============================================================================

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use super::block::{END_MARKER, START_MARKER};

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Compiled on first use, then reused for the rest of the process
    PATTERN.get_or_init(|| {
        let pattern = format!(
            "(?s){}.*?{}",
            regex::escape(START_MARKER),
            regex::escape(END_MARKER)
        );
        Regex::new(&pattern).expect("marker pattern is a valid regex")
    })
}

pub fn merge_block(content: &str, block: &str) -> String {
    let pattern = block_pattern();

    // Case 1: a block is already there, swap it out
    if pattern.is_match(content) {
        // NoExpand: '$' in the block is literal text, not a capture reference
        return pattern.replacen(content, 1, NoExpand(block)).into_owned();
    }

    // Case 2: no block yet, append after exactly one blank line
    let separator = if content.is_empty() {
        ""
    } else if content.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };

    format!("{}{}{}", content, separator, block)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does (?s) mean in the pattern?
//    - It lets `.` match newlines too, so one match can span many lines
//
// 2. What is `.*?` (with the question mark)?
//    - A "lazy" match: as few characters as possible
//    - `.*` (greedy) would run to the LAST end marker in the file and eat
//      everything between two separate blocks
//
// 3. Why regex::escape()?
//    - The markers contain characters like `!` and `-`; escape() makes sure
//      they are matched literally, whatever they contain
//
// 4. What is NoExpand?
//    - Normally a replacement string can refer to capture groups: `$1`,
//      `${name}`
//    - Our block is plain text that might contain `$` (e.g. a language
//      count line), so NoExpand inserts it byte for byte
//
// 5. What is OnceLock?
//    - A cell that is written once and then only read
//    - get_or_init() runs the closure the first time and returns the stored
//      value every time after that
// -----------------------------------------------------------------------------
