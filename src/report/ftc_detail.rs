use crate::constants::messages::{FTC_SEARCH_HINT, NO_FTC_RESULTS};
use crate::data_fetcher::api::{ftcstats_event_page, ftcstats_team_page};
use crate::data_fetcher::models::{FtcEvent, FtcSearchResults, FtcStat, FtcTeam};

use super::list_view::{ListItem, ListView};

fn stat_value(stat: Option<&FtcStat>) -> String {
    stat.and_then(|s| s.value)
        .map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn stat_rank(stat: Option<&FtcStat>) -> String {
    stat.and_then(|s| s.rank)
        .map_or_else(|| "-".to_string(), |r| r.to_string())
}

fn location_line(team: &FtcTeam) -> Option<String> {
    team.location
        .as_ref()
        .map(|l| format!("{}, {}, {}", l.city, l.state, l.country))
}

/// Team detail with the quick-stats table (best OPR and rank for total
/// non-penalty, auto, teleop and endgame points).
pub fn ftc_team_markdown(team: &FtcTeam) -> String {
    let stats = team.quick_stats.as_ref();
    let tot = stats.and_then(|s| s.tot.as_ref());
    let auto = stats.and_then(|s| s.auto.as_ref());
    let dc = stats.and_then(|s| s.dc.as_ref());
    let eg = stats.and_then(|s| s.eg.as_ref());

    let mut md = format!("# Team {} - {}\n", team.number, team.name);
    if let Some(location) = location_line(team) {
        md.push_str(&format!("From {location}\n"));
    }
    md.push_str("\n## Quick Stats\n");
    md.push_str("|               | Total NP | Auto    | Teleop  | Endgame |\n");
    md.push_str("|---------------|----------|---------|---------|---------|\n");
    md.push_str(&format!(
        "| **Best OPR**  | {} | {} | {} | {} |\n",
        stat_value(tot),
        stat_value(auto),
        stat_value(dc),
        stat_value(eg)
    ));
    md.push_str(&format!(
        "| **Rank**      | {}  | {}  | {}  | {}  |",
        stat_rank(tot),
        stat_rank(auto),
        stat_rank(dc),
        stat_rank(eg)
    ));
    md
}

pub fn ftc_team_item(team: &FtcTeam) -> ListItem {
    ListItem::new(format!("{} - {}", team.number, team.name))
        .subtitle(location_line(team).unwrap_or_default())
        .detail(ftc_team_markdown(team))
        .link("View Team on FTC Stats", ftcstats_team_page(team.number))
}

pub fn ftc_event_item(event: &FtcEvent) -> ListItem {
    ListItem::new(&event.name).detail(format!("# Event: {}\nCode: {}", event.name, event.code))
}

/// View for the `ftc-search` command. `results` is `None` when no search was
/// made. An empty result reads "No teams found" only for a non-empty query.
pub fn ftc_search_view(text: &str, results: Option<&FtcSearchResults>) -> ListView {
    match results {
        Some(results) if !results.is_empty() => {
            let items = results
                .teams
                .iter()
                .map(ftc_team_item)
                .chain(results.events.iter().map(ftc_event_item))
                .collect();
            ListView::with_items(items)
        }
        Some(_) if !text.is_empty() => ListView::empty(NO_FTC_RESULTS),
        _ => ListView::empty(FTC_SEARCH_HINT),
    }
}

/// View for the `ftc-event` command. Nothing is fetched; the item points at
/// the event page.
pub fn ftc_event_view(code: &str) -> ListView {
    ListView::with_items(vec![
        ListItem::new(format!("Event {code}"))
            .subtitle("Loading...")
            .link("View Event on FTC Stats", ftcstats_event_page(code)),
    ])
}
