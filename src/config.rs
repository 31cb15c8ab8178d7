//! Run configuration.

/// Target repository, resolved once at startup and passed by reference.
pub struct Config {
    pub owner: String,
    pub repo: String,
}

impl Config {
    /// Read REPO_OWNER / REPO_NAME from the environment, falling back to
    /// this project's own repository.
    pub fn from_env() -> Self {
        Self {
            owner: std::env::var("REPO_OWNER").unwrap_or_else(|_| "halfguru".to_string()),
            repo: std::env::var("REPO_NAME").unwrap_or_else(|_| "repo-leaderboard".to_string()),
        }
    }
}
