pub mod match_records;
pub mod team_data;

pub use match_records::{round_prediction, to_match_record};
pub use team_data::{award_names, status_string, to_event_summary, to_team_profile, to_team_stats};
