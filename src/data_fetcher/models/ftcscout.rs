use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables<'a> {
    pub search_text: &'a str,
    pub limit: usize,
    pub season: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FtcSearchData {
    #[serde(default)]
    pub teams_search: Option<Vec<FtcTeam>>,
    #[serde(default)]
    pub events_search: Option<Vec<FtcEvent>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtcTeam {
    pub number: i32,
    pub name: String,
    #[serde(default)]
    pub location: Option<FtcLocation>,
    #[serde(default)]
    pub quick_stats: Option<FtcQuickStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FtcLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// FTCScout quick stats: `tot` total non-penalty points, `auto`, `dc`
/// (driver-controlled / teleop) and `eg` (endgame).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FtcQuickStats {
    #[serde(default)]
    pub tot: Option<FtcStat>,
    #[serde(default)]
    pub auto: Option<FtcStat>,
    #[serde(default)]
    pub dc: Option<FtcStat>,
    #[serde(default)]
    pub eg: Option<FtcStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FtcStat {
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FtcEvent {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Search outcome with teams and events kept apart, teams listed first.
#[derive(Debug, Clone, Default)]
pub struct FtcSearchResults {
    pub teams: Vec<FtcTeam>,
    pub events: Vec<FtcEvent>,
}

impl FtcSearchResults {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.events.is_empty()
    }
}
