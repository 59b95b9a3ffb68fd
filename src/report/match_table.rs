//! Match schedule tables
//!
//! Turns a flat list of [`MatchRecord`]s into markdown tables grouped by
//! round (qualifications, semifinals, finals), each round in play order.
//! Records whose key names no known round are left out.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use crate::constants::messages::NO_MATCHES;
use crate::data_fetcher::models::MatchRecord;

static QUAL_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^qm(\d+)").expect("valid qualification pattern"));
static SEMI_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sf\d+m(\d+)").expect("valid semifinal pattern"));
static FINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^f(\d+)m(\d+)").expect("valid final pattern"));

const TABLE_COLUMNS: &str = "| Match | Red | Blue | Pred Red | Pred Blue | Red | Blue |\n\
                             | --- | --- | --- | --- | --- | --- | --- |\n";

const QUALIFICATIONS_TITLE: &str = "**Qualifications** \n";
const SEMIFINALS_TITLE: &str = "\n **Semifinals** \n";
const FINALS_TITLE: &str = "\n **Finals** \n";

/// Tournament round a match belongs to, read from its trimmed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    Qualification,
    Semifinal,
    Final,
    Unrecognized,
}

impl Round {
    /// Classifies a trimmed key by its round marker. `qm`, `sf` and `f` begin
    /// with different letters, so a key matches at most one round.
    pub fn classify(trimmed: &str) -> Round {
        if trimmed.starts_with("qm") {
            Round::Qualification
        } else if trimmed.starts_with("sf") {
            Round::Semifinal
        } else if trimmed.starts_with('f') {
            Round::Final
        } else {
            Round::Unrecognized
        }
    }
}

/// Removes the `<event>_` prefix from a match key. Keys without an
/// underscore, or starting with one, are returned unchanged.
///
/// # Example
/// ```
/// use robostats::report::match_table::trimmed_key;
///
/// assert_eq!(trimmed_key("2024txhou_qm12"), "qm12");
/// assert_eq!(trimmed_key("2024txhou_sf1m1"), "sf1m1");
/// assert_eq!(trimmed_key("qm3"), "qm3");
/// ```
pub fn trimmed_key(key: &str) -> &str {
    match key.split_once('_') {
        Some((event, rest)) if !event.is_empty() => rest,
        _ => key,
    }
}

/// Matches split by round, each in input order until sorted.
#[derive(Debug, Default)]
pub struct RoundPartitions<'a> {
    pub qualifications: Vec<&'a MatchRecord>,
    pub semifinals: Vec<&'a MatchRecord>,
    pub finals: Vec<&'a MatchRecord>,
}

pub fn partition_matches(matches: &[MatchRecord]) -> RoundPartitions<'_> {
    let mut partitions = RoundPartitions::default();
    for m in matches {
        match Round::classify(trimmed_key(&m.key)) {
            Round::Qualification => partitions.qualifications.push(m),
            Round::Semifinal => partitions.semifinals.push(m),
            Round::Final => partitions.finals.push(m),
            Round::Unrecognized => {}
        }
    }
    partitions
}

/// Stable sort that tolerates comparators which are not a total order.
///
/// The leading run is taken as found (reversed first when strictly
/// descending), then every later element is placed by binary search over the
/// sorted prefix, moving left only past elements it compares strictly less
/// than. Elements the comparator calls equal keep their relative order.
fn sort_loosely<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let descending = compare(&items[1], &items[0]) == Ordering::Less;
    let mut run = 2;
    while run < items.len() {
        let order = compare(&items[run], &items[run - 1]);
        let continues = if descending {
            order == Ordering::Less
        } else {
            order != Ordering::Less
        };
        if !continues {
            break;
        }
        run += 1;
    }
    if descending {
        items[..run].reverse();
    }

    for start in run..items.len() {
        let (mut left, mut right) = (0, start);
        while left < right {
            let mid = left + (right - left) / 2;
            if compare(&items[start], &items[mid]) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        items[left..=start].rotate_right(1);
    }
}

/// Compares two runs of ASCII digits by numeric value without parsing, so
/// arbitrarily long numbers never overflow.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| &s[..end])
}

/// Qualification number from the full key (`<event>_qm<N>...`).
fn qualification_number(key: &str) -> Option<&str> {
    match key.split_once('_') {
        Some((event, rest)) if !event.is_empty() => rest.strip_prefix("qm").and_then(leading_digits),
        _ => None,
    }
}

fn compare_qualifications(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    match (qualification_number(&a.key), qualification_number(&b.key)) {
        (Some(x), Some(y)) => cmp_digits(x, y),
        _ => Ordering::Equal,
    }
}

fn compare_semifinals(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    match (
        trimmed_key(&a.key).chars().nth(2),
        trimmed_key(&b.key).chars().nth(2),
    ) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

fn final_match_number(trimmed: &str) -> Option<&str> {
    FINAL_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Collation order for keys: case-insensitive first, then lowercase ahead
/// of uppercase.
fn cmp_collated(a: &str, b: &str) -> Ordering {
    a.to_ascii_lowercase()
        .cmp(&b.to_ascii_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare_finals(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    let (a_trim, b_trim) = (trimmed_key(&a.key), trimmed_key(&b.key));
    match (final_match_number(a_trim), final_match_number(b_trim)) {
        (Some(x), Some(y)) => cmp_digits(x, y),
        _ => cmp_collated(a_trim, b_trim),
    }
}

/// Sorts every partition into play order.
pub fn sort_partitions(partitions: &mut RoundPartitions<'_>) {
    sort_loosely(&mut partitions.qualifications, |a, b| compare_qualifications(a, b));
    sort_loosely(&mut partitions.semifinals, |a, b| compare_semifinals(a, b));
    sort_loosely(&mut partitions.finals, |a, b| compare_finals(a, b));
}

/// Display label of a match row: `Quals N`, `Match c` or `Finals N`, or the
/// trimmed key when the key does not follow the usual pattern.
pub fn row_label(round: Round, trimmed: &str) -> String {
    match round {
        Round::Qualification => match QUAL_LABEL_RE.captures(trimmed) {
            Some(caps) => format!("Quals {}", &caps[1]),
            None => trimmed.to_string(),
        },
        Round::Semifinal => match (SEMI_LABEL_RE.is_match(trimmed), trimmed.chars().nth(2)) {
            (true, Some(c)) => format!("Match {c}"),
            _ => trimmed.to_string(),
        },
        Round::Final => match FINAL_RE.captures(trimmed) {
            Some(caps) => format!("Finals {}", &caps[2]),
            None => trimmed.to_string(),
        },
        Round::Unrecognized => trimmed.to_string(),
    }
}

fn score_cell(score: Option<i32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

fn bold_if(cell: String, highlight: bool) -> String {
    if highlight { format!("**{cell}**") } else { cell }
}

fn push_row(table: &mut String, round: Round, m: &MatchRecord) {
    let label = row_label(round, trimmed_key(&m.key));
    let [r1, r2, r3] = m.red_alliance();
    let [b1, b2, b3] = m.blue_alliance();

    let (pred_red, pred_blue, score_red, score_blue) = if round == Round::Final {
        let scores = m.score_red.zip(m.score_blue);
        (
            bold_if(m.pred_red.to_string(), m.pred_red > m.pred_blue),
            bold_if(m.pred_blue.to_string(), m.pred_blue > m.pred_red),
            bold_if(score_cell(m.score_red), scores.is_some_and(|(r, b)| r > b)),
            bold_if(score_cell(m.score_blue), scores.is_some_and(|(r, b)| b > r)),
        )
    } else {
        (
            m.pred_red.to_string(),
            m.pred_blue.to_string(),
            score_cell(m.score_red),
            score_cell(m.score_blue),
        )
    };

    table.push_str(&format!(
        "| {label} | {r1}, {r2}, {r3} | {b1}, {b2}, {b3} | {pred_red} | {pred_blue} | {score_red} | {score_blue} |\n"
    ));
}

fn push_section(table: &mut String, title: &str, round: Round, matches: &[&MatchRecord]) {
    if matches.is_empty() {
        return;
    }
    table.push_str(title);
    table.push_str(TABLE_COLUMNS);
    for m in matches {
        push_row(table, round, m);
    }
}

/// Renders the match schedule as markdown.
///
/// Returns `"No matches found."` for an empty slice and an empty string when
/// no record belongs to a known round.
///
/// # Example
/// ```
/// use robostats::data_fetcher::models::MatchRecord;
/// use robostats::report::match_table::format_match_schedule;
///
/// assert_eq!(format_match_schedule(&[]), "No matches found.");
///
/// let m = MatchRecord {
///     key: "2024txhou_qm2".to_string(),
///     red1: "1".into(), red2: "2".into(), red3: "3".into(),
///     blue1: "4".into(), blue2: "5".into(), blue3: "6".into(),
///     score_red: Some(10), score_blue: Some(20),
///     pred_red: 11, pred_blue: 19,
/// };
/// let table = format_match_schedule(&[m]);
/// assert!(table.starts_with("**Qualifications** \n"));
/// assert!(table.ends_with("| Quals 2 | 1, 2, 3 | 4, 5, 6 | 11 | 19 | 10 | 20 |\n"));
/// ```
pub fn format_match_schedule(matches: &[MatchRecord]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut partitions = partition_matches(matches);
    sort_partitions(&mut partitions);

    let mut table = String::new();
    push_section(&mut table, QUALIFICATIONS_TITLE, Round::Qualification, &partitions.qualifications);
    push_section(&mut table, SEMIFINALS_TITLE, Round::Semifinal, &partitions.semifinals);
    push_section(&mut table, FINALS_TITLE, Round::Final, &partitions.finals);
    table
}
