//! Command handlers
//!
//! Each view handler runs one command against an already configured client
//! and returns the markdown to print. Handlers never fail: fetch errors are
//! logged and rendered as part of the output.

use crate::config::Config;
use crate::constants::messages::INVALID_TEAM;
use crate::data_fetcher::api::{
    fetch_event_report, fetch_team_report, fetch_team_year, parse_team_number, search_ftc_or_empty,
};
use crate::data_fetcher::processors::to_team_stats;
use crate::error::AppError;
use crate::report::{self, team_list_view, team_summary_markdown};
use reqwest::Client;
use tracing::{error, info, warn};

/// `team <TEAM>`: profile, season stats and every event with its matches.
pub async fn team_view(client: &Client, config: &Config, team_arg: &str, year: i32) -> String {
    let team = match parse_team_number(team_arg) {
        Ok(team) => team,
        Err(e) => {
            warn!("{e}");
            return INVALID_TEAM.to_string();
        }
    };
    info!("Looking up team {team} for {year}");
    let report = fetch_team_report(client, config, team, year).await;
    team_list_view(&report).render()
}

/// `team-summary <TEAM>`: Statbotics season summary only.
pub async fn team_summary_view(
    client: &Client,
    config: &Config,
    team_arg: &str,
    year: i32,
) -> String {
    let team = match parse_team_number(team_arg) {
        Ok(team) => team,
        Err(e) => {
            warn!("{e}");
            return INVALID_TEAM.to_string();
        }
    };
    let stats = match fetch_team_year(client, config, team, year).await {
        Ok(team_year) => Some(to_team_stats(&team_year)),
        Err(e) => {
            error!("Error fetching data for team {team}: {e}");
            None
        }
    };
    team_summary_markdown(team, stats.as_ref())
}

/// `event <EVENT_KEY>`: event details and its full match schedule.
pub async fn event_view(client: &Client, config: &Config, event_key: &str) -> String {
    let event_key = event_key.trim();
    match fetch_event_report(client, config, event_key).await {
        Ok(summary) => report::event_view(&summary).render(),
        Err(e) => {
            error!("Error fetching event {event_key}: {e}");
            format!("Error fetching event {event_key}: {e}\n")
        }
    }
}

/// `ftc-search [TEXT]`: FTCScout team and event search.
pub async fn ftc_search_view(client: &Client, config: &Config, text: &str, season: i32) -> String {
    let results = search_ftc_or_empty(client, config, text, season).await;
    report::ftc_search_view(text, results.as_ref()).render()
}

/// `ftc-event <CODE>`: link to the event page.
pub fn ftc_event_view(code: &str) -> String {
    report::ftc_event_view(code.trim()).render()
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Requested configuration changes (--set-tba-key, --set-log-file, --clear-log-file).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    pub tba_api_key: Option<String>,
    pub log_file_path: Option<String>,
    pub clear_log_file_path: bool,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.tba_api_key.is_none() && self.log_file_path.is_none() && !self.clear_log_file_path
    }

    /// Applies the changes to `config`. Setting a log file path takes
    /// precedence over clearing it.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(key) = &self.tba_api_key {
            config.tba_api_key = key.trim().to_string();
        }

        if let Some(path) = &self.log_file_path {
            config.log_file_path = Some(path.clone());
        } else if self.clear_log_file_path {
            config.log_file_path = None;
        }
    }
}

/// Handles configuration update commands.
///
/// Starts from the saved config file, or the defaults when there is none,
/// so updating never triggers the first-run prompt.
pub async fn handle_config_update_command(update: &ConfigUpdate) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path).await.unwrap_or_default();

    update.apply_to(&mut config);
    config.validate()?;
    config.save().await?;

    if update.log_file_path.is_none() && update.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}
