//! FRC and FTC robotics statistics library
//!
//! This library fetches team, event and match data from TheBlueAlliance,
//! Statbotics and FTCScout and renders it as markdown, including per-event
//! match schedules grouped by round.
//!
//! # Examples
//!
//! ```rust,no_run
//! use robostats::config::Config;
//! use robostats::data_fetcher::api::{create_http_client_with_timeout, fetch_event_report};
//! use robostats::error::AppError;
//! use robostats::report::format_match_schedule;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Fetch an event with all of its matches
//!     let event = fetch_event_report(&client, &config, "2024txhou").await?;
//!
//!     // Render the match schedule
//!     println!("{}", format_match_schedule(&event.matches));
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{EventSummary, FtcSearchResults, MatchRecord, TeamReport};
pub use error::AppError;
pub use report::format_match_schedule;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
