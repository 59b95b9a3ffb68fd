use crate::data_fetcher::models::{MatchRecord, StatboticsMatch};

/// Rounds a predicted score half-up to an integer (2.5 -> 3, -2.5 -> -2).
/// A missing prediction counts as zero.
pub fn round_prediction(value: Option<f64>) -> i32 {
    match value {
        Some(v) if v.is_finite() => (v + 0.5).floor() as i32,
        _ => 0,
    }
}

fn seat(team_keys: &[String], index: usize) -> String {
    team_keys.get(index).cloned().unwrap_or_default()
}

/// Flattens a Statbotics match into the record used by the schedule tables.
///
/// # Examples
///
/// ```rust
/// use robostats::data_fetcher::models::StatboticsMatch;
/// use robostats::data_fetcher::processors::to_match_record;
///
/// let json = r#"{"key":"2024txhou_qm3",
///     "alliances":{"red":{"team_keys":[254,118,1678]},"blue":{"team_keys":[33,67,971]}},
///     "result":{"red_score":80,"blue_score":75},
///     "pred":{"red_score":77.5,"blue_score":70.2}}"#;
/// let m: StatboticsMatch = serde_json::from_str(json).unwrap();
/// let record = to_match_record(&m);
/// assert_eq!(record.red1, "254");
/// assert_eq!(record.pred_red, 78);
/// assert_eq!(record.pred_blue, 70);
/// ```
pub fn to_match_record(m: &StatboticsMatch) -> MatchRecord {
    let red = &m.alliances.red.team_keys;
    let blue = &m.alliances.blue.team_keys;
    let (score_red, score_blue) = m
        .result
        .as_ref()
        .map(|r| (r.red_score, r.blue_score))
        .unwrap_or((None, None));
    let (pred_red, pred_blue) = m
        .pred
        .as_ref()
        .map(|p| (round_prediction(p.red_score), round_prediction(p.blue_score)))
        .unwrap_or((0, 0));

    MatchRecord {
        key: m.key.clone(),
        red1: seat(red, 0),
        red2: seat(red, 1),
        red3: seat(red, 2),
        blue1: seat(blue, 0),
        blue2: seat(blue, 1),
        blue3: seat(blue, 2),
        score_red,
        score_blue,
        pred_red,
        pred_blue,
    }
}
