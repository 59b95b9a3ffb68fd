use serde::{Deserialize, Deserializer, Serialize};

/// `GET /team_year/{team}/{year}`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatboticsTeamYear {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub epa: Option<StatboticsEpa>,
    #[serde(default)]
    pub record: Option<StatboticsRecord>,
    #[serde(default)]
    pub district_points: Option<f64>,
    #[serde(default)]
    pub district_rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatboticsEpa {
    #[serde(default)]
    pub total_points: Option<StatboticsMean>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatboticsMean {
    #[serde(default)]
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatboticsRecord {
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub ties: Option<u32>,
}

/// `GET /match/{key}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatboticsMatch {
    pub key: String,
    pub alliances: StatboticsAlliances,
    #[serde(default)]
    pub result: Option<StatboticsScores<i32>>,
    #[serde(default)]
    pub pred: Option<StatboticsScores<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatboticsAlliances {
    pub red: StatboticsAlliance,
    pub blue: StatboticsAlliance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatboticsAlliance {
    #[serde(default, deserialize_with = "deserialize_team_ids")]
    pub team_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatboticsScores<T> {
    #[serde(default)]
    pub red_score: Option<T>,
    #[serde(default)]
    pub blue_score: Option<T>,
}

/// Statbotics sends team keys as numbers, older payloads as strings.
fn deserialize_team_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|value| match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}
