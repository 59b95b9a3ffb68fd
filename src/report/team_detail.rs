use crate::data_fetcher::api::{statbotics_team_year_page, tba_avatar_url, tba_team_page};
use crate::data_fetcher::models::{TeamReport, TeamStats};

use super::districts::display_district;
use super::event_detail::event_item;
use super::list_view::{ListItem, ListView};

/// Overview markdown shown for the team itself. Parts that depend on data
/// not fetched yet are left blank.
pub fn team_overview_markdown(report: &TeamReport) -> String {
    let team = report.team;
    let nickname = report
        .profile
        .as_ref()
        .map(|p| format!(" - {}", p.nickname))
        .unwrap_or_default();
    let from = report
        .profile
        .as_ref()
        .map(|p| format!("{}, {}, {}", p.city, p.state_prov, p.country))
        .unwrap_or_default();

    let record = match (report.epa(), report.stats.as_ref()) {
        (Some(epa), Some(stats)) => format!("**Record:** {}  \n\n**EPA:** {epa}", stats.record()),
        _ => String::new(),
    };

    let district = report
        .stats
        .as_ref()
        .and_then(|stats| {
            stats.district.as_ref().map(|code| {
                format!(
                    "As a member of the {} district, Team {team} ranked #{} having earned {} points.",
                    display_district(code),
                    stats.district_rank,
                    stats.district_points
                )
            })
        })
        .unwrap_or_default();

    format!(
        "\n# Team {team}{nickname}  \n\
         <img src=\"{avatar}\" width=\"40\" />\n\
         From {from} \n\n\
         {record}\n\n\
         {district}\n\n\
         [View on TBA]({tba}) / [View on Statbotics]({statbotics})",
        avatar = tba_avatar_url(report.year, team),
        tba = tba_team_page(team),
        statbotics = statbotics_team_year_page(team),
    )
}

/// View for the `team` command: the team item followed by an `Events`
/// section with one item per event.
pub fn team_list_view(report: &TeamReport) -> ListView {
    let subtitle = report.epa().map(|epa| format!("EPA: {epa}")).unwrap_or_default();
    let team_item = ListItem::new(format!("Team {}", report.team))
        .subtitle(subtitle)
        .detail(team_overview_markdown(report))
        .link("View on TBA", tba_team_page(report.team));

    let mut view = ListView::with_items(vec![team_item]);
    view.push_section("Events", report.events.iter().map(event_item).collect());
    view
}

/// Statbotics-only summary for the `team-summary` command.
pub fn team_summary_markdown(team: u32, stats: Option<&TeamStats>) -> String {
    const MISSING: &str = "N/A";
    let Some(stats) = stats else {
        return format!(
            "# Team {team} - {MISSING} \n\nEPA: {MISSING} \n\nState/Province: {MISSING} \n\nCountry: {MISSING} \n"
        );
    };

    let mut md = format!(
        "# Team {team} - {} \n\nEPA: {} \n\nState/Province: {} \n\nCountry: {} \n",
        stats.name, stats.epa, stats.state, stats.country
    );
    if let Some(district) = &stats.district {
        md.push_str(&format!("\nDistrict: {district} \n"));
    }
    md
}
