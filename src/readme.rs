//! README leaderboard section: markdown rendering and marker splicing.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

use crate::leaderboard::Contributor;

pub const START_MARKER: &str = "<!-- LEADERBOARD START -->";
pub const END_MARKER: &str = "<!-- LEADERBOARD END -->";

const TOP_N: usize = 5;

/// Markdown table of the top contributors, wrapped in the marker comments.
pub fn render_fragment(leaderboard: &[Contributor], repo: &str) -> String {
    let mut md = String::new();
    md.push_str(START_MARKER);
    md.push('\n');
    md.push_str(&format!("# {repo} Top 5 Contributors\n\n"));
    md.push_str("| Rank | Contributor | Contributions |\n");
    md.push_str("|------|-------------|----------------|\n");
    for (rank, c) in leaderboard.iter().take(TOP_N).enumerate() {
        md.push_str(&format!(
            "| {} | <img src='{}' alt='{}' width='40'> {} | {} |\n",
            rank + 1,
            c.avatar_url,
            c.username,
            c.username,
            c.contributions
        ));
    }
    md.push('\n');
    md.push_str(END_MARKER);
    md
}

/// Replace the marker span of `existing` with `fragment`.
///
/// Missing file -> the fragment as-is. Both markers present -> the span from
/// start marker through end marker is replaced. Markers absent -> fragment is
/// appended after a blank line, original content untouched. Re-running on the
/// output is a no-op.
pub fn splice(existing: Option<&str>, fragment: &str) -> String {
    let Some(existing) = existing else {
        return fragment.to_string();
    };

    if let Some(start) = existing.find(START_MARKER) {
        if let Some(end_rel) = existing[start..].find(END_MARKER) {
            let end = start + end_rel + END_MARKER.len();
            return format!("{}{}{}", &existing[..start], fragment, &existing[end..]);
        }
    }

    format!("{existing}\n{fragment}")
}

/// Read, splice, and write back the README. A missing file is created.
pub fn update_readme(path: &Path, fragment: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let updated = splice(existing.as_deref(), fragment);
    fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(username: &str, contributions: u32) -> Contributor {
        Contributor {
            username: username.to_string(),
            contributions,
            avatar_url: format!("https://example.com/{username}.png"),
            xp: 0,
            level: 0,
            xp_progress: 0,
            streak: 0,
            recent_commits: 0,
        }
    }

    fn fragment() -> String {
        render_fragment(&[contributor("alice", 30), contributor("bob", 12)], "demo")
    }

    #[test]
    fn fragment_is_marker_wrapped_and_capped_at_five_rows() {
        let board: Vec<Contributor> = (0..8)
            .map(|i| contributor(&format!("user{i}"), 100 - i))
            .collect();
        let md = render_fragment(&board, "demo");

        assert!(md.starts_with(START_MARKER));
        assert!(md.ends_with(END_MARKER));
        assert!(md.contains("# demo Top 5 Contributors"));
        assert!(md.contains("| 5 | "));
        assert!(!md.contains("| 6 | "));
        assert!(md.contains("<img src='https://example.com/user0.png' alt='user0' width='40'>"));
    }

    #[test]
    fn missing_file_becomes_the_fragment() {
        let f = fragment();
        assert_eq!(splice(None, &f), f);
    }

    #[test]
    fn existing_span_is_replaced_in_place() {
        let f = fragment();
        let doc = format!("# My Project\n\n{START_MARKER}\nstale table\n{END_MARKER}\n\nFooter\n");
        let out = splice(Some(&doc), &f);

        assert!(out.starts_with("# My Project\n\n"));
        assert!(out.ends_with("\n\nFooter\n"));
        assert!(out.contains(&f));
        assert!(!out.contains("stale table"));
    }

    #[test]
    fn document_without_markers_keeps_all_bytes_as_prefix() {
        let f = fragment();
        let doc = "# My Project\n\nSome prose.\n";
        let out = splice(Some(doc), &f);

        assert!(out.starts_with(doc));
        assert!(out.ends_with(&f));
    }

    #[test]
    fn splice_is_idempotent() {
        let f = fragment();
        for doc in [
            None,
            Some("# My Project\n\nSome prose.\n"),
            Some("before\n<!-- LEADERBOARD START -->\nold\n<!-- LEADERBOARD END -->\nafter\n"),
        ] {
            let once = splice(doc, &f);
            let twice = splice(Some(&once), &f);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn only_the_first_marker_pair_is_touched() {
        let f = fragment();
        let doc = format!(
            "{START_MARKER}\nfirst\n{END_MARKER}\nmiddle\n{START_MARKER}\nsecond\n{END_MARKER}\n"
        );
        let out = splice(Some(&doc), &f);

        assert!(out.contains("second"));
        assert!(!out.contains("first"));
    }
}
