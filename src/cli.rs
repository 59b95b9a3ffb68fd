use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use robostats::commands::ConfigUpdate;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// FRC and FTC robotics statistics in your terminal
///
/// Looks up teams and events on TheBlueAlliance, Statbotics and FTCScout and
/// prints the results as markdown: team profiles, season records, EPA,
/// awards and per-event match schedules with predicted and actual scores.
///
/// FRC commands need a TheBlueAlliance read key. It is asked for on first
/// run, or can be set with --set-tba-key or ROBOSTATS_TBA_API_KEY.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// FRC season to look up. Defaults to the current year.
    #[arg(long, short = 'y', global = true, help_heading = "Query Options")]
    pub year: Option<i32>,

    /// FTC season searched by ftc-search. Defaults to the configured season.
    #[arg(long, short = 's', global = true, help_heading = "Query Options")]
    pub season: Option<i32>,

    /// Store a TheBlueAlliance read key in the config file.
    #[arg(long = "set-tba-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_tba_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print logs to stderr. Output on stdout stays plain markdown.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Team profile, season record and every event with its match schedule
    Team {
        /// FRC team number, e.g. 254
        #[arg(allow_hyphen_values = true)]
        team: String,
    },
    /// Statbotics season summary for a team
    TeamSummary {
        /// FRC team number, e.g. 254
        #[arg(allow_hyphen_values = true)]
        team: String,
    },
    /// Event details and full match schedule
    Event {
        /// TBA event key, e.g. 2024txhou
        event_key: String,
    },
    /// Search FTC teams and events on FTCScout
    FtcSearch {
        /// Search text; one or two characters are not searched
        #[arg(default_value = "")]
        text: String,
    },
    /// Link to an FTC event on FTC Stats
    FtcEvent {
        /// FTC event code, e.g. USTXHOQ
        code: String,
    },
}

impl Command {
    /// Whether the command calls TheBlueAlliance and so needs a read key.
    pub fn needs_tba_key(&self) -> bool {
        matches!(self, Command::Team { .. } | Command::Event { .. })
    }
}

impl Args {
    pub fn config_update(&self) -> ConfigUpdate {
        ConfigUpdate {
            tba_api_key: self.new_tba_api_key.clone(),
            log_file_path: self.new_log_file_path.clone(),
            clear_log_file_path: self.clear_log_file_path,
        }
    }
}
