//! Markdown rendering of fetched data
//!
//! Everything here is pure: renderers take the view models produced by
//! `data_fetcher` and return strings or [`ListView`]s, never touching the
//! network.

pub mod districts;
pub mod event_detail;
pub mod ftc_detail;
pub mod html;
pub mod list_view;
pub mod match_table;
pub mod team_detail;

pub use event_detail::{event_detail_markdown, event_view};
pub use ftc_detail::{ftc_event_view, ftc_search_view};
pub use list_view::{Link, ListItem, ListSection, ListView};
pub use match_table::format_match_schedule;
pub use team_detail::{team_list_view, team_overview_markdown, team_summary_markdown};
