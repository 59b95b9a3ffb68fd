use crate::data_fetcher::models::{EventSummary, MatchRecord, TeamProfile, TeamReport, TeamStats};
use serde_json::{Value, json};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a played match with fixed alliances and scores
    pub fn match_record(key: &str) -> MatchRecord {
        MatchRecord {
            key: key.to_string(),
            red1: "254".to_string(),
            red2: "118".to_string(),
            red3: "1678".to_string(),
            blue1: "33".to_string(),
            blue2: "67".to_string(),
            blue3: "971".to_string(),
            score_red: Some(100),
            score_blue: Some(90),
            pred_red: 95,
            pred_blue: 92,
        }
    }

    /// Creates a match with the given predictions and (optional) actual scores
    pub fn match_with_scores(
        key: &str,
        pred_red: i32,
        pred_blue: i32,
        score_red: Option<i32>,
        score_blue: Option<i32>,
    ) -> MatchRecord {
        MatchRecord {
            pred_red,
            pred_blue,
            score_red,
            score_blue,
            ..Self::match_record(key)
        }
    }

    /// Creates one match record per key, in the given order
    pub fn match_records(keys: &[&str]) -> Vec<MatchRecord> {
        keys.iter().map(|key| Self::match_record(key)).collect()
    }

    /// Creates an event summary in Houston with the given matches
    pub fn event_summary(key: &str, name: &str, matches: Vec<MatchRecord>) -> EventSummary {
        EventSummary {
            key: key.to_string(),
            name: name.to_string(),
            city: "Houston".to_string(),
            state_prov: "TX".to_string(),
            country: "USA".to_string(),
            status: String::new(),
            awards: Vec::new(),
            matches,
        }
    }

    /// Creates a fully populated team report without events
    pub fn team_report(team: u32, year: i32) -> TeamReport {
        TeamReport {
            team,
            year,
            profile: Some(TeamProfile {
                nickname: format!("Team {team} Robotics"),
                city: "Houston".to_string(),
                state_prov: "Texas".to_string(),
                country: "USA".to_string(),
            }),
            stats: Some(TeamStats {
                name: format!("Team {team} Robotics"),
                state: "TX".to_string(),
                country: "USA".to_string(),
                district: Some("FIT".to_string()),
                epa: 42.5,
                wins: 20,
                losses: 8,
                ties: 0,
                district_points: 150.0,
                district_rank: 12,
            }),
            events: Vec::new(),
        }
    }

    /// Statbotics `/match/{key}` response body
    pub fn statbotics_match_json(key: &str, red_score: i32, blue_score: i32) -> Value {
        json!({
            "key": key,
            "alliances": {
                "red": {"team_keys": [254, 118, 1678]},
                "blue": {"team_keys": [33, 67, 971]}
            },
            "result": {"red_score": red_score, "blue_score": blue_score},
            "pred": {"red_score": 95.4, "blue_score": 91.6}
        })
    }

    /// TBA `/team/frc{team}` response body
    pub fn tba_team_json(team: u32, nickname: &str) -> Value {
        json!({
            "key": format!("frc{team}"),
            "team_number": team,
            "nickname": nickname,
            "city": "Houston",
            "state_prov": "Texas",
            "country": "USA"
        })
    }

    /// Statbotics `/team_year/{team}/{year}` response body
    pub fn statbotics_team_year_json(team: u32, year: i32) -> Value {
        json!({
            "team": team,
            "year": year,
            "name": format!("Team {team} Robotics"),
            "state": "TX",
            "country": "USA",
            "district": "fit",
            "epa": {"total_points": {"mean": 42.5}},
            "record": {"wins": 20, "losses": 8, "ties": 0},
            "district_points": 150,
            "district_rank": 12
        })
    }

    /// TBA simple event body
    pub fn tba_event_json(key: &str, name: &str) -> Value {
        json!({
            "key": key,
            "name": name,
            "city": "Houston",
            "state_prov": "TX",
            "country": "USA",
            "start_date": "2024-03-01",
            "end_date": "2024-03-03"
        })
    }
}
