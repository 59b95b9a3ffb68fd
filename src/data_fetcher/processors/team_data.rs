use crate::data_fetcher::models::{
    EventSummary, StatboticsTeamYear, TbaAward, TbaEventSimple, TbaTeam, TbaTeamEventStatus,
    TeamProfile, TeamStats,
};

pub fn to_team_profile(team: &TbaTeam) -> TeamProfile {
    TeamProfile {
        nickname: team.nickname.clone().unwrap_or_default(),
        city: team.city.clone().unwrap_or_default(),
        state_prov: team.state_prov.clone().unwrap_or_default(),
        country: team.country.clone().unwrap_or_default(),
    }
}

/// Reduces a Statbotics team-year to the numbers the views show. Missing
/// values become zero; an empty district string counts as no district.
pub fn to_team_stats(team_year: &StatboticsTeamYear) -> TeamStats {
    let epa = team_year
        .epa
        .as_ref()
        .and_then(|e| e.total_points.as_ref())
        .and_then(|t| t.mean)
        .unwrap_or(0.0);
    let record = team_year.record.clone().unwrap_or_default();

    TeamStats {
        name: team_year.name.clone().unwrap_or_default(),
        state: team_year.state.clone().unwrap_or_default(),
        country: team_year.country.clone().unwrap_or_default(),
        district: team_year.district.clone().filter(|d| !d.is_empty()),
        epa,
        wins: record.wins.unwrap_or(0),
        losses: record.losses.unwrap_or(0),
        ties: record.ties.unwrap_or(0),
        district_points: team_year.district_points.unwrap_or(0.0),
        district_rank: team_year.district_rank.unwrap_or(0),
    }
}

/// Starts an event summary from the TBA simple event; status, awards and
/// matches are filled in later.
pub fn to_event_summary(event: &TbaEventSimple) -> EventSummary {
    EventSummary {
        key: event.key.clone(),
        name: event.name.clone(),
        city: event.city.clone().unwrap_or_default(),
        state_prov: event.state_prov.clone().unwrap_or_default(),
        country: event.country.clone().unwrap_or_default(),
        ..Default::default()
    }
}

pub fn status_string(status: Option<&TbaTeamEventStatus>) -> String {
    status
        .and_then(|s| s.overall_status_str.clone())
        .unwrap_or_default()
}

pub fn award_names(awards: &[TbaAward]) -> Vec<String> {
    awards.iter().map(|a| a.name.clone()).collect()
}
