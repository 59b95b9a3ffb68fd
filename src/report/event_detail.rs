use crate::data_fetcher::api::{statbotics_event_page, tba_event_page};
use crate::data_fetcher::models::EventSummary;

use super::html::html_to_markdown;
use super::list_view::{ListItem, ListView};
use super::match_table::format_match_schedule;

/// Awards line: `They also won the following awards: ` then one ` * name`
/// bullet per award, or nothing when there were no awards.
pub fn awards_markdown(awards: &[String]) -> String {
    if awards.is_empty() {
        return String::new();
    }
    format!("They also won the following awards: \n * {}", awards.join("\n * "))
}

pub fn event_detail_markdown(event: &EventSummary) -> String {
    format!(
        "\n# {name}\n({key}) - [View on TBA]({tba}) / [View on Statbotics]({statbotics})\n\n\
         {city}, {state}, {country}\n\n\
         {status}\n\n\
         {awards}\n\n\
         {table}",
        name = event.name,
        key = event.key,
        tba = tba_event_page(&event.key),
        statbotics = statbotics_event_page(&event.key),
        city = event.city,
        state = event.state_prov,
        country = event.country,
        status = html_to_markdown(&event.status),
        awards = awards_markdown(&event.awards),
        table = format_match_schedule(&event.matches),
    )
}

pub fn event_item(event: &EventSummary) -> ListItem {
    ListItem::new(&event.name)
        .subtitle(format!("{}, {}", event.city, event.state_prov))
        .detail(event_detail_markdown(event))
}

/// Single-event view used by the `event` command.
pub fn event_view(event: &EventSummary) -> ListView {
    ListView::with_items(vec![
        event_item(event).link("View on TBA", tba_event_page(&event.key)),
    ])
}
