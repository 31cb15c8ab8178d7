use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::github::{CommitEntry, GithubClient, RawContributor};
use crate::{scoring, streak};

/// Commits inside this window earn XP.
const XP_WINDOW_DAYS: i64 = 90;

/// Window for the weekly-champion commit count.
const CHAMPION_WINDOW_DAYS: i64 = 7;

/// Our own automation account, excluded by name.
const AUTOMATION_LOGIN: &str = "github-actions[bot]";

/// One leaderboard row, fully derived at build time.
pub struct Contributor {
    pub username: String,
    pub contributions: u32,
    pub avatar_url: String,
    pub xp: u32,
    pub level: u32,
    pub xp_progress: u32,
    pub streak: u32,
    pub recent_commits: u32,
}

/// Bot detection. Three independent checks; the username check is
/// case-insensitive, the type check accepts the API's literal "Bot", and the
/// automation identity is matched exactly.
fn is_bot(entry: &RawContributor) -> bool {
    entry.login.to_lowercase().contains("bot")
        || entry.kind.eq_ignore_ascii_case("bot")
        || entry.login == AUTOMATION_LOGIN
}

fn build_record(
    entry: RawContributor,
    window_commits: &[CommitEntry],
    all_commits: &[CommitEntry],
    now: DateTime<Utc>,
) -> Contributor {
    let xp: u32 = window_commits.iter().map(|c| scoring::score(&c.message)).sum();

    let week_start = now - Duration::days(CHAMPION_WINDOW_DAYS);
    let recent_commits = all_commits.iter().filter(|c| c.date >= week_start).count() as u32;

    let timestamps: Vec<DateTime<Utc>> = all_commits.iter().map(|c| c.date).collect();
    let dates = streak::distinct_dates_desc(&timestamps);

    Contributor {
        username: entry.login,
        contributions: entry.contributions,
        avatar_url: entry.avatar_url,
        xp,
        level: scoring::level(xp),
        xp_progress: scoring::level_progress(xp),
        streak: streak::current_streak(&dates),
        recent_commits,
    }
}

/// Fetch and score every human contributor, sorted by total contributions.
///
/// Per-contributor fetch failures degrade to zero XP / no streak for that
/// contributor; a failed contributor listing yields an empty leaderboard.
pub async fn build_leaderboard(client: &GithubClient, config: &Config) -> Vec<Contributor> {
    let raw = match client.list_contributors(&config.owner, &config.repo).await {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Warning: failed to list contributors: {e:#}");
            return Vec::new();
        }
    };

    let now = Utc::now();
    let xp_since = now - Duration::days(XP_WINDOW_DAYS);

    let mut leaderboard = Vec::new();
    for entry in raw.into_iter().filter(|c| !is_bot(c)) {
        let window_commits = match client
            .list_commits(&config.owner, &config.repo, &entry.login, Some(xp_since))
            .await
        {
            Ok(commits) => commits,
            Err(e) => {
                eprintln!(
                    "Warning: failed to fetch recent commits for {}: {e:#}",
                    entry.login
                );
                Vec::new()
            }
        };

        let all_commits = match client
            .list_commits(&config.owner, &config.repo, &entry.login, None)
            .await
        {
            Ok(commits) => commits,
            Err(e) => {
                eprintln!(
                    "Warning: failed to fetch commit history for {}: {e:#}",
                    entry.login
                );
                Vec::new()
            }
        };

        leaderboard.push(build_record(entry, &window_commits, &all_commits, now));
    }

    sort_by_contributions(&mut leaderboard);
    leaderboard
}

// sort_by is stable, so equal counts keep their fetch order
fn sort_by_contributions(board: &mut [Contributor]) {
    board.sort_by(|a, b| b.contributions.cmp(&a.contributions));
}

/// Contributor with the most commits in the trailing week. First encountered
/// wins ties; None only for an empty leaderboard.
pub fn weekly_champion(leaderboard: &[Contributor]) -> Option<&Contributor> {
    leaderboard.iter().fold(None, |best, c| match best {
        Some(b) if c.recent_commits <= b.recent_commits => Some(b),
        _ => Some(c),
    })
}
