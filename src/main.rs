mod badge;
mod config;
mod github;
mod html;
mod leaderboard;
mod readme;
mod scoring;
mod streak;

use config::Config;
use github::GithubClient;
use std::fs;
use std::path::Path;

const README_PATH: &str = "README.md";
const HTML_PATH: &str = "leaderboard.html";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    println!(
        "Fetching contributors for {}/{}...",
        config.owner, config.repo
    );

    let client = GithubClient::new()?;
    let board = leaderboard::build_leaderboard(&client, &config).await;

    if board.is_empty() {
        println!("No contributors found; nothing to render.");
        return Ok(());
    }

    let page = html::render_page(&board, &config);
    fs::write(HTML_PATH, page)?;

    let fragment = readme::render_fragment(&board, &config.repo);
    readme::update_readme(Path::new(README_PATH), &fragment)?;

    println!(
        "Updated {README_PATH} and {HTML_PATH} for {} contributors.",
        board.len()
    );

    Ok(())
}
