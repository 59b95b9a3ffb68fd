// TheBlueAlliance (v3 read API) operations.
// Every call needs the configured read key; a missing key fails before any
// request is sent.

use crate::config::Config;
use crate::data_fetcher::models::{TbaAward, TbaEventSimple, TbaTeam, TbaTeamEventStatus};
use crate::error::AppError;
use reqwest::Client;

use super::fetch_utils::fetch_with_tba_key;
use super::urls::{
    build_tba_event_match_keys_url, build_tba_event_url, build_tba_team_event_url,
    build_tba_team_events_url, build_tba_team_url,
};

pub async fn fetch_tba_team(
    client: &Client,
    config: &Config,
    team: u32,
) -> Result<TbaTeam, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_team_url(&config.tba_api_domain, team);
    fetch_with_tba_key(client, &url, key).await
}

pub async fn fetch_team_events(
    client: &Client,
    config: &Config,
    team: u32,
    year: i32,
) -> Result<Vec<TbaEventSimple>, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_team_events_url(&config.tba_api_domain, team, year);
    fetch_with_tba_key(client, &url, key).await
}

/// TBA answers `null` for teams without a status at the event yet.
pub async fn fetch_team_event_status(
    client: &Client,
    config: &Config,
    team: u32,
    event_key: &str,
) -> Result<Option<TbaTeamEventStatus>, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_team_event_url(&config.tba_api_domain, team, event_key, "status");
    fetch_with_tba_key(client, &url, key).await
}

pub async fn fetch_team_event_awards(
    client: &Client,
    config: &Config,
    team: u32,
    event_key: &str,
) -> Result<Vec<TbaAward>, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_team_event_url(&config.tba_api_domain, team, event_key, "awards");
    fetch_with_tba_key(client, &url, key).await
}

pub async fn fetch_team_event_match_keys(
    client: &Client,
    config: &Config,
    team: u32,
    event_key: &str,
) -> Result<Vec<String>, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_team_event_url(&config.tba_api_domain, team, event_key, "matches/keys");
    fetch_with_tba_key(client, &url, key).await
}

pub async fn fetch_event(
    client: &Client,
    config: &Config,
    event_key: &str,
) -> Result<TbaEventSimple, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_event_url(&config.tba_api_domain, event_key);
    fetch_with_tba_key(client, &url, key).await
}

pub async fn fetch_event_match_keys(
    client: &Client,
    config: &Config,
    event_key: &str,
) -> Result<Vec<String>, AppError> {
    let key = config.tba_api_key()?;
    let url = build_tba_event_match_keys_url(&config.tba_api_domain, event_key);
    fetch_with_tba_key(client, &url, key).await
}
