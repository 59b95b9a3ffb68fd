use serde::{Deserialize, Serialize};

/// `GET /team/frc{number}`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TbaTeam {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub team_number: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_prov: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Element of `GET /team/frc{number}/events/{year}/simple` and body of
/// `GET /event/{key}/simple`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TbaEventSimple {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_prov: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// `GET /team/frc{number}/event/{key}/status`. TBA answers `null` when the
/// team has no status yet, so callers fetch `Option<TbaTeamEventStatus>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TbaTeamEventStatus {
    #[serde(default)]
    pub overall_status_str: Option<String>,
}

/// Element of `GET /team/frc{number}/event/{key}/awards`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TbaAward {
    pub name: String,
    #[serde(default)]
    pub award_type: Option<i32>,
    #[serde(default)]
    pub event_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserializes_with_missing_fields() {
        let json = r#"{"key":"frc254","team_number":254,"nickname":"The Cheesy Poofs","city":"San Jose"}"#;
        let team: TbaTeam = serde_json::from_str(json).unwrap();
        assert_eq!(team.team_number, 254);
        assert_eq!(team.nickname.as_deref(), Some("The Cheesy Poofs"));
        assert_eq!(team.state_prov, None);
    }

    #[test]
    fn test_null_status_is_none() {
        let status: Option<TbaTeamEventStatus> = serde_json::from_str("null").unwrap();
        assert!(status.is_none());

        let status: Option<TbaTeamEventStatus> =
            serde_json::from_str(r#"{"overall_status_str":"Team <b>254</b> is <b>Rank 1/40</b>"}"#)
                .unwrap();
        assert!(status.unwrap().overall_status_str.unwrap().contains("Rank 1/40"));
    }

    #[test]
    fn test_awards_ignore_unknown_fields() {
        let json = r#"[{"name":"Regional Winners","award_type":1,"event_key":"2024txhou","recipient_list":[],"year":2024}]"#;
        let awards: Vec<TbaAward> = serde_json::from_str(json).unwrap();
        assert_eq!(awards.len(), 1);
        assert_eq!(awards[0].name, "Regional Winners");
    }
}
