pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_event_report, fetch_team_report, parse_team_number, search_ftc_or_empty};
pub use models::{EventSummary, FtcSearchResults, MatchRecord, TeamReport};
