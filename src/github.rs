use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = "repo-leaderboard";

// Single fixed-size page; the API caps per_page at 100 and we do not paginate.
const PAGE_SIZE: u32 = 100;

#[derive(Clone)]
pub struct GithubClient {
    http: Arc<Client>,
}

/// Contributor entry as reported by the contributors endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContributor {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub avatar_url: String,
    pub contributions: u32,
}

/// One commit from the commit listing: its message and author timestamp.
#[derive(Debug, Clone)]
pub struct CommitEntry {
    pub message: String,
    pub date: DateTime<Utc>,
}

impl GithubClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Low-level GET returning the raw JSON payload. Non-success statuses are
    /// errors; callers decide whether to degrade or abort.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Network error sending request to GitHub: {e}"))?;

        let status = resp.status();

        // Parse JSON even for non-2xx to capture error payloads
        let json: Value = resp
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON from GitHub: {e}"))?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "GitHub API returned HTTP {}: {json:#}",
                status.as_u16()
            ));
        }

        Ok(json)
    }

    /// List contributors of a repository (first page only).
    pub async fn list_contributors(&self, owner: &str, repo: &str) -> Result<Vec<RawContributor>> {
        let url = format!("{API_ROOT}/repos/{owner}/{repo}/contributors");
        let query = [("per_page", PAGE_SIZE.to_string())];

        let json = self.get(&url, &query).await?;
        let contributors: Vec<RawContributor> =
            serde_json::from_value(json).context("Failed to deserialize contributors response")?;

        Ok(contributors)
    }

    /// List commits authored by `author`, optionally restricted to commits
    /// since a point in time. Commits without a usable author date are
    /// skipped.
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        author: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommitEntry>> {
        #[derive(Deserialize)]
        struct CommitNode {
            commit: CommitDetail,
        }
        #[derive(Deserialize)]
        struct CommitDetail {
            message: String,
            author: Option<CommitAuthor>,
        }
        #[derive(Deserialize)]
        struct CommitAuthor {
            date: Option<String>,
        }

        let url = format!("{API_ROOT}/repos/{owner}/{repo}/commits");
        let mut query = vec![
            ("author", author.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
        ];
        if let Some(since) = since {
            query.push(("since", since.to_rfc3339()));
        }

        let json = self.get(&url, &query).await?;
        let nodes: Vec<CommitNode> =
            serde_json::from_value(json).context("Failed to deserialize commits response")?;

        let mut out = Vec::new();
        for node in nodes {
            let date = node
                .commit
                .author
                .and_then(|a| a.date)
                .and_then(|d| DateTime::parse_from_rfc3339(&d).ok())
                .map(|d| d.with_timezone(&Utc));

            if let Some(date) = date {
                out.push(CommitEntry {
                    message: node.commit.message,
                    date,
                });
            }
        }

        Ok(out)
    }
}
