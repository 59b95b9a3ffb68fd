//! URL building utilities for API endpoints and linked web pages

use crate::constants::links;

/// Builds the TBA team URL.
///
/// # Example
/// ```
/// use robostats::data_fetcher::api::build_tba_team_url;
///
/// let url = build_tba_team_url("https://tba.example.com/api/v3", 254);
/// assert_eq!(url, "https://tba.example.com/api/v3/team/frc254");
/// ```
pub fn build_tba_team_url(api_domain: &str, team: u32) -> String {
    format!("{api_domain}/team/frc{team}")
}

/// Builds the TBA URL listing a team's events for one season.
///
/// # Example
/// ```
/// use robostats::data_fetcher::api::build_tba_team_events_url;
///
/// let url = build_tba_team_events_url("https://tba.example.com/api/v3", 254, 2024);
/// assert_eq!(url, "https://tba.example.com/api/v3/team/frc254/events/2024/simple");
/// ```
pub fn build_tba_team_events_url(api_domain: &str, team: u32, year: i32) -> String {
    format!("{api_domain}/team/frc{team}/events/{year}/simple")
}

/// Builds a TBA team-at-event URL; `resource` is `status`, `awards` or `matches/keys`.
///
/// # Example
/// ```
/// use robostats::data_fetcher::api::build_tba_team_event_url;
///
/// let url = build_tba_team_event_url("https://tba.example.com/api/v3", 254, "2024casj", "matches/keys");
/// assert_eq!(url, "https://tba.example.com/api/v3/team/frc254/event/2024casj/matches/keys");
/// ```
pub fn build_tba_team_event_url(
    api_domain: &str,
    team: u32,
    event_key: &str,
    resource: &str,
) -> String {
    format!("{api_domain}/team/frc{team}/event/{event_key}/{resource}")
}

/// Builds the TBA simple event URL.
pub fn build_tba_event_url(api_domain: &str, event_key: &str) -> String {
    format!("{api_domain}/event/{event_key}/simple")
}

/// Builds the TBA URL listing every match key of an event.
pub fn build_tba_event_match_keys_url(api_domain: &str, event_key: &str) -> String {
    format!("{api_domain}/event/{event_key}/matches/keys")
}

/// Builds the Statbotics team-year URL.
///
/// # Example
/// ```
/// use robostats::data_fetcher::api::build_statbotics_team_year_url;
///
/// let url = build_statbotics_team_year_url("https://api.statbotics.io/v3", 254, 2024);
/// assert_eq!(url, "https://api.statbotics.io/v3/team_year/254/2024");
/// ```
pub fn build_statbotics_team_year_url(api_domain: &str, team: u32, year: i32) -> String {
    format!("{api_domain}/team_year/{team}/{year}")
}

/// Builds the Statbotics match URL.
pub fn build_statbotics_match_url(api_domain: &str, match_key: &str) -> String {
    format!("{api_domain}/match/{match_key}")
}

pub fn tba_team_page(team: u32) -> String {
    format!("{}/team/{team}", links::TBA_WEB)
}

pub fn tba_event_page(event_key: &str) -> String {
    format!("{}/event/{event_key}", links::TBA_WEB)
}

pub fn tba_avatar_url(year: i32, team: u32) -> String {
    format!("{}/avatar/{year}/frc{team}.png", links::TBA_WEB)
}

pub fn statbotics_team_year_page(team: u32) -> String {
    format!("{}/team_year/{team}/", links::STATBOTICS_API_WEB)
}

pub fn statbotics_event_page(event_key: &str) -> String {
    format!("{}/event/{event_key}", links::STATBOTICS_API_WEB)
}

pub fn ftcstats_team_page(number: i32) -> String {
    format!("{}/team/{number}", links::FTCSTATS_WEB)
}

pub fn ftcstats_event_page(code: &str) -> String {
    format!("{}/event/{code}", links::FTCSTATS_WEB)
}
