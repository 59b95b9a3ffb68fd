// Statbotics (v3) operations: season statistics and per-match predictions.

use crate::config::Config;
use crate::data_fetcher::models::{MatchRecord, StatboticsMatch, StatboticsTeamYear};
use crate::data_fetcher::processors::to_match_record;
use crate::error::AppError;
use reqwest::Client;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::urls::{build_statbotics_match_url, build_statbotics_team_year_url};

pub async fn fetch_team_year(
    client: &Client,
    config: &Config,
    team: u32,
    year: i32,
) -> Result<StatboticsTeamYear, AppError> {
    let url = build_statbotics_team_year_url(&config.statbotics_api_domain, team, year);
    fetch(client, &url).await
}

pub async fn fetch_match(
    client: &Client,
    config: &Config,
    match_key: &str,
) -> Result<StatboticsMatch, AppError> {
    let url = build_statbotics_match_url(&config.statbotics_api_domain, match_key);
    fetch(client, &url).await
}

/// Fetches every match one after another, preserving the order of `match_keys`.
/// The first failing request aborts the whole batch.
#[instrument(skip(client, config, match_keys), fields(count = match_keys.len()))]
pub async fn fetch_match_records(
    client: &Client,
    config: &Config,
    match_keys: &[String],
) -> Result<Vec<MatchRecord>, AppError> {
    let mut records = Vec::with_capacity(match_keys.len());
    for match_key in match_keys {
        let m = fetch_match(client, config, match_key).await?;
        debug!("Fetched match {}", m.key);
        records.push(to_match_record(&m));
    }
    info!("Fetched {} match records", records.len());
    Ok(records)
}
