// src/data_fetcher/api/team_pipeline.rs - Sequential team and event lookups across TBA and Statbotics

use crate::config::Config;
use crate::data_fetcher::models::{EventSummary, TeamReport};
use crate::data_fetcher::processors::{
    award_names, status_string, to_event_summary, to_team_profile, to_team_stats,
};
use crate::error::AppError;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::statbotics_api::{fetch_match_records, fetch_team_year};
use super::tba_api::{
    fetch_event, fetch_event_match_keys, fetch_tba_team, fetch_team_event_awards,
    fetch_team_event_match_keys, fetch_team_event_status, fetch_team_events,
};

/// Parses a team number argument. Surrounding whitespace is ignored; anything
/// other than a non-negative integer is rejected.
///
/// # Example
/// ```
/// use robostats::data_fetcher::api::parse_team_number;
///
/// assert_eq!(parse_team_number(" 254 ").unwrap(), 254);
/// assert!(parse_team_number("").is_err());
/// assert!(parse_team_number("frc254").is_err());
/// ```
pub fn parse_team_number(input: &str) -> Result<u32, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_team_number(input));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| AppError::invalid_team_number(input))
}

/// Builds the full team report. Never fails: the first error ends the
/// lookup, is logged, and whatever was gathered up to that point is returned.
///
/// # Example
/// ```rust,no_run
/// use robostats::config::Config;
/// use robostats::data_fetcher::api::{create_http_client_with_timeout, fetch_team_report};
///
/// #[tokio::main]
/// async fn main() -> Result<(), robostats::AppError> {
///     let config = Config::load().await?;
///     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
///     let report = fetch_team_report(&client, &config, 254, 2024).await;
///     println!("{} events", report.events.len());
///     Ok(())
/// }
/// ```
#[instrument(skip(client, config))]
pub async fn fetch_team_report(client: &Client, config: &Config, team: u32, year: i32) -> TeamReport {
    let mut report = TeamReport::new(team, year);
    if let Err(e) = populate_team_report(client, config, &mut report).await {
        error!("Error fetching data for team {team}: {e}");
    }
    report
}

/// Fills `report` step by step. Each step writes into the report before the
/// next request is made, so an error leaves every earlier result in place.
pub async fn populate_team_report(
    client: &Client,
    config: &Config,
    report: &mut TeamReport,
) -> Result<(), AppError> {
    let team = report.team;
    let year = report.year;

    let tba_team = fetch_tba_team(client, config, team).await?;
    report.profile = Some(to_team_profile(&tba_team));
    info!("Fetched TBA profile for team {team}");

    let team_year = fetch_team_year(client, config, team, year).await?;
    report.stats = Some(to_team_stats(&team_year));
    info!("Fetched Statbotics {year} stats for team {team}");

    let events = fetch_team_events(client, config, team, year).await?;
    info!("Team {} attended {} events in {}", team, events.len(), year);
    report.events = events.iter().map(to_event_summary).collect();

    for event in report.events.iter_mut() {
        let status = fetch_team_event_status(client, config, team, &event.key).await?;
        event.status = status_string(status.as_ref());

        let awards = fetch_team_event_awards(client, config, team, &event.key).await?;
        event.awards = award_names(&awards);

        let match_keys = fetch_team_event_match_keys(client, config, team, &event.key).await?;
        event.matches = fetch_match_records(client, config, &match_keys).await?;
        info!("Event {}: {} matches", event.key, event.matches.len());
    }

    Ok(())
}

/// Builds an event summary from the event's TBA record and every match it
/// lists. Errors propagate to the caller.
#[instrument(skip(client, config))]
pub async fn fetch_event_report(
    client: &Client,
    config: &Config,
    event_key: &str,
) -> Result<EventSummary, AppError> {
    let event = fetch_event(client, config, event_key).await?;
    let mut summary = to_event_summary(&event);

    let match_keys = fetch_event_match_keys(client, config, event_key).await?;
    summary.matches = fetch_match_records(client, config, &match_keys).await?;
    info!("Event {}: {} matches", summary.key, summary.matches.len());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn create_mock_config(server: &MockServer) -> Config {
        Config {
            tba_api_key: "test-key".to_string(),
            tba_api_domain: server.uri(),
            statbotics_api_domain: format!("{}/sb", server.uri()),
            ..Config::default()
        }
    }

    async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_parse_team_number() {
        assert_eq!(parse_team_number("118").unwrap(), 118);
        assert_eq!(parse_team_number("\t42\n").unwrap(), 42);
        assert!(matches!(
            parse_team_number("   "),
            Err(AppError::InvalidTeamNumber { .. })
        ));
        assert!(parse_team_number("abc").is_err());
        assert!(parse_team_number("-5").is_err());
    }

    #[tokio::test]
    async fn test_failed_profile_leaves_empty_report() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team/frc9999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let report = fetch_team_report(&client, &config, 9999, 2024).await;
        assert_eq!(report.team, 9999);
        assert!(report.profile.is_none());
        assert!(report.stats.is_none());
        assert!(report.events.is_empty());
    }

    #[tokio::test]
    async fn test_event_report() {
        let mock_server = MockServer::start().await;
        mount_json(
            &mock_server,
            "/event/2024txhou/simple",
            json!({"key": "2024txhou", "name": "Houston", "city": "Houston",
                   "state_prov": "TX", "country": "USA"}),
        )
        .await;
        mount_json(&mock_server, "/event/2024txhou/matches/keys", json!(["2024txhou_qm1"])).await;
        mount_json(
            &mock_server,
            "/sb/match/2024txhou_qm1",
            json!({
                "key": "2024txhou_qm1",
                "alliances": {"red": {"team_keys": [1, 2, 3]}, "blue": {"team_keys": [4, 5, 6]}},
                "result": {"red_score": 10, "blue_score": 20},
                "pred": {"red_score": 12.5, "blue_score": 18.2}
            }),
        )
        .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let summary = fetch_event_report(&client, &config, "2024txhou").await.unwrap();
        assert_eq!(summary.name, "Houston");
        assert_eq!(summary.matches.len(), 1);
        assert_eq!(summary.matches[0].red1, "1");
        assert_eq!(summary.matches[0].pred_red, 13);
    }
}
