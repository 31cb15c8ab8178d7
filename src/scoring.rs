//! Commit-message XP scoring.
//!
//! Each commit earns XP for at most one category. Categories are checked in
//! declaration order and the first keyword hit wins, so a message like
//! "fix the readme bug" scores as a small fix (1 XP) even though it also
//! mentions docs and bugs. The table order is part of the scoring contract.

/// XP value and trigger keywords, checked top to bottom.
const CATEGORIES: &[(u32, &[&str])] = &[
    (1, &["typo", "fix", "minor"]),               // small fix
    (2, &["docs", "readme", "documentation"]),    // documentation
    (3, &["bug", "fix issue", "resolve"]),        // bug fix
    (4, &["feature", "add", "implement"]),        // new feature
    (5, &["major", "refactor", "complete module"]), // robust feature
];

/// XP granted toward the next level.
pub const XP_PER_LEVEL: u32 = 50;

/// Score a single commit message. Unmatched messages earn 0.
pub fn score(message: &str) -> u32 {
    let message = message.to_lowercase();
    for (xp, keywords) in CATEGORIES {
        if keywords.iter().any(|k| message.contains(k)) {
            return *xp;
        }
    }
    0
}

pub fn level(xp: u32) -> u32 {
    xp / XP_PER_LEVEL
}

/// Progress toward the next level as a percentage in [0, 98].
pub fn level_progress(xp: u32) -> u32 {
    (xp % XP_PER_LEVEL) * 2
}
