mod fetch_utils;
pub mod ftcscout_api;
pub mod http_client;
pub mod statbotics_api;
pub mod tba_api;
pub mod team_pipeline;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export source-specific operations
pub use ftcscout_api::{search_ftc, search_ftc_or_empty, should_search};
pub use statbotics_api::{fetch_match, fetch_match_records, fetch_team_year};
pub use tba_api::{
    fetch_event, fetch_event_match_keys, fetch_tba_team, fetch_team_event_awards,
    fetch_team_event_match_keys, fetch_team_event_status, fetch_team_events,
};
pub use team_pipeline::{
    fetch_event_report, fetch_team_report, parse_team_number, populate_team_report,
};
