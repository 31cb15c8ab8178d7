use crate::badge;
use crate::config::Config;
use crate::leaderboard::{self, Contributor};

// GitHub dark palette
const BG: &str = "#0d1117";
const CARD_BG: &str = "#161b22";
const TEXT: &str = "#c9d1d9";
const ACCENT: &str = "#ffa657";
const BAR_FILL: &str = "#3fb950";
const BAR_TRACK: &str = "#21262d";
const MUTED: &str = "#616e7f";

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn build_champion_banner(board: &[Contributor]) -> String {
    match leaderboard::weekly_champion(board) {
        Some(champion) => format!(
            r#"<div class="champion">🔥 Weekly Champion: <strong>{}</strong> with {} commit{} in the last 7 days</div>"#,
            escape_html(&champion.username),
            champion.recent_commits,
            if champion.recent_commits == 1 { "" } else { "s" }
        ),
        None => r#"<div class="champion muted">No weekly champion yet</div>"#.to_string(),
    }
}

fn build_rows(board: &[Contributor]) -> String {
    let mut rows = String::new();
    for (rank, c) in board.iter().enumerate() {
        let name = escape_html(&c.username);
        rows.push_str(&format!(
            r#"    <tr>
      <td class="rank">{rank}</td>
      <td class="contributor"><img src="{avatar}" alt="{name}" width="40" height="40"> {name} {badge}</td>
      <td>Lv {level}</td>
      <td>{streak} day{streak_s}</td>
      <td class="xp">{xp} XP
        <div class="bar"><div class="fill" style="width: {progress}%"></div></div>
      </td>
      <td>{contributions}</td>
    </tr>
"#,
            rank = rank + 1,
            avatar = escape_html(&c.avatar_url),
            name = name,
            badge = badge::badge(c.contributions),
            level = c.level,
            streak = c.streak,
            streak_s = if c.streak == 1 { "" } else { "s" },
            xp = c.xp,
            progress = c.xp_progress,
            contributions = c.contributions,
        ));
    }
    rows
}

/// Render the full leaderboard page.
pub fn render_page(board: &[Contributor], config: &Config) -> String {
    let champion = build_champion_banner(board);
    let rows = build_rows(board);
    let title = format!("{}/{}", config.owner, config.repo);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title} Contributor Leaderboard</title>
<style>
  body {{ background: {BG}; color: {TEXT}; font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; padding: 2rem; }}
  h1 {{ color: {ACCENT}; }}
  .champion {{ background: {CARD_BG}; border-radius: 8px; padding: 1rem; margin-bottom: 1.5rem; }}
  .muted {{ color: {MUTED}; }}
  table {{ width: 100%; border-collapse: collapse; background: {CARD_BG}; border-radius: 8px; }}
  th, td {{ padding: 0.6rem 1rem; text-align: left; border-bottom: 1px solid {BAR_TRACK}; }}
  .rank {{ color: {MUTED}; }}
  .contributor img {{ border-radius: 50%; vertical-align: middle; }}
  .bar {{ background: {BAR_TRACK}; border-radius: 4px; height: 6px; margin-top: 4px; width: 120px; }}
  .fill {{ background: {BAR_FILL}; border-radius: 4px; height: 6px; }}
</style>
</head>
<body>
  <h1>{title} Contributor Leaderboard</h1>
  {champion}
  <table>
    <tr><th>Rank</th><th>Contributor</th><th>Level</th><th>Streak</th><th>XP</th><th>Contributions</th></tr>
{rows}  </table>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            owner: "halfguru".to_string(),
            repo: "repo-leaderboard".to_string(),
        }
    }

    fn contributor(username: &str, contributions: u32, recent_commits: u32) -> Contributor {
        Contributor {
            username: username.to_string(),
            contributions,
            avatar_url: "https://example.com/a.png".to_string(),
            xp: 73,
            level: 1,
            xp_progress: 46,
            streak: 4,
            recent_commits,
        }
    }

    #[test]
    fn page_lists_every_contributor_with_progress() {
        let board = vec![contributor("alice", 120, 3), contributor("bob", 12, 0)];
        let page = render_page(&board, &config());

        assert!(page.contains("alice"));
        assert!(page.contains("bob"));
        assert!(page.contains("💎")); // alice's 100+ badge
        assert!(page.contains("width: 46%"));
        assert!(page.contains("Weekly Champion: <strong>alice</strong>"));
    }

    #[test]
    fn empty_board_has_no_champion() {
        let page = render_page(&[], &config());
        assert!(page.contains("No weekly champion yet"));
    }

    #[test]
    fn usernames_are_escaped() {
        let board = vec![contributor("<script>alert(1)</script>", 1, 1)];
        let page = render_page(&board, &config());
        assert!(!page.contains("<script>alert(1)"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
