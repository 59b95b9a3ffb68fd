/// One played or scheduled match, flattened for the match-schedule tables.
///
/// Participant ids are kept as strings exactly as the upstream API reports
/// them. Actual scores are `None` until the match has been played.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchRecord {
    pub key: String,
    pub red1: String,
    pub red2: String,
    pub red3: String,
    pub blue1: String,
    pub blue2: String,
    pub blue3: String,
    pub score_red: Option<i32>,
    pub score_blue: Option<i32>,
    pub pred_red: i32,
    pub pred_blue: i32,
}

impl MatchRecord {
    pub fn red_alliance(&self) -> [&str; 3] {
        [&self.red1, &self.red2, &self.red3]
    }

    pub fn blue_alliance(&self) -> [&str; 3] {
        [&self.blue1, &self.blue2, &self.blue3]
    }
}

/// Team identity from TheBlueAlliance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamProfile {
    pub nickname: String,
    pub city: String,
    pub state_prov: String,
    pub country: String,
}

/// Season statistics from Statbotics. Missing numbers are reported as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamStats {
    pub name: String,
    pub state: String,
    pub country: String,
    pub district: Option<String>,
    pub epa: f64,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub district_points: f64,
    pub district_rank: u32,
}

impl TeamStats {
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

/// One event a team attended, with everything shown in its detail view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventSummary {
    pub key: String,
    pub name: String,
    pub city: String,
    pub state_prov: String,
    pub country: String,
    /// TBA overall status, still HTML-formatted
    pub status: String,
    pub awards: Vec<String>,
    pub matches: Vec<MatchRecord>,
}

/// Everything the `team` command gathered. Populated step by step; a fetch
/// failure leaves the remaining parts at their defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamReport {
    pub team: u32,
    pub year: i32,
    pub profile: Option<TeamProfile>,
    pub stats: Option<TeamStats>,
    pub events: Vec<EventSummary>,
}

impl TeamReport {
    pub fn new(team: u32, year: i32) -> Self {
        TeamReport {
            team,
            year,
            ..Default::default()
        }
    }

    /// EPA when known and non-zero.
    pub fn epa(&self) -> Option<f64> {
        self.stats.as_ref().map(|s| s.epa).filter(|epa| *epa != 0.0)
    }
}
