// src/main.rs
mod cli;
mod logging;

use chrono::{Datelike, Local};
use clap::{CommandFactory, Parser};
use cli::{Args, Command};
use robostats::commands::{
    event_view, ftc_event_view, ftc_search_view, handle_config_update_command,
    handle_list_config_command, team_summary_view, team_view,
};
use robostats::config::Config;
use robostats::data_fetcher::api::create_http_client_with_timeout;
use robostats::error::AppError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations before anything touches the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    let update = args.config_update();
    if !update.is_empty() {
        return handle_config_update_command(&update).await;
    }

    let Some(command) = args.command.clone() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    // Only commands that call TBA may prompt for the read key
    let config = if command.needs_tba_key() {
        Config::load().await?
    } else {
        Config::load_without_prompt().await?
    };
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let year = args.year.unwrap_or_else(|| Local::now().year());
    let season = args.season.unwrap_or(config.ftc_season);
    info!("Running {:?} (year {}, FTC season {})", command, year, season);

    let output = match &command {
        Command::Team { team } => team_view(&client, &config, team, year).await,
        Command::TeamSummary { team } => team_summary_view(&client, &config, team, year).await,
        Command::Event { event_key } => event_view(&client, &config, event_key).await,
        Command::FtcSearch { text } => ftc_search_view(&client, &config, text, season).await,
        Command::FtcEvent { code } => ftc_event_view(code),
    };

    println!("{output}");
    Ok(())
}
