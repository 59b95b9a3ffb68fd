//! Match schedule rendering tests
//!
//! Exercise the public reporter the way the event and team views use it:
//! unordered records in, markdown tables out.

use robostats::{
    data_fetcher::models::MatchRecord,
    format_match_schedule,
    report::match_table::{Round, partition_matches, trimmed_key},
    testing_utils::TestDataBuilder,
};

fn row_lines(table: &str) -> Vec<&str> {
    table
        .lines()
        .filter(|l| l.starts_with("| ") && !l.starts_with("| Match |") && !l.starts_with("| ---"))
        .collect()
}

#[test]
fn test_empty_collection() {
    assert_eq!(format_match_schedule(&[]), "No matches found.");
}

#[test]
fn test_single_qualification_example() {
    let record = MatchRecord {
        key: "2024txhou_qm3".to_string(),
        red1: "254".to_string(),
        red2: "118".to_string(),
        red3: "1678".to_string(),
        blue1: "33".to_string(),
        blue2: "67".to_string(),
        blue3: "971".to_string(),
        score_red: Some(80),
        score_blue: Some(75),
        pred_red: 78,
        pred_blue: 70,
    };
    let table = format_match_schedule(&[record]);
    assert_eq!(
        table,
        "**Qualifications** \n\
         | Match | Red | Blue | Pred Red | Pred Blue | Red | Blue |\n\
         | --- | --- | --- | --- | --- | --- | --- |\n\
         | Quals 3 | 254, 118, 1678 | 33, 67, 971 | 78 | 70 | 80 | 75 |\n"
    );
    assert!(!table.contains("Semifinals"));
    assert!(!table.contains("Finals"));
}

#[test]
fn test_finals_highlighting() {
    let record = TestDataBuilder::match_with_scores("2024txhou_f1m1", 30, 45, Some(50), Some(40));
    let table = format_match_schedule(&[record]);
    assert!(table.contains("| Finals 1 | 254, 118, 1678 | 33, 67, 971 | 30 | **45** | **50** | 40 |\n"));
}

#[test]
fn test_finals_only_collection() {
    let records = TestDataBuilder::match_records(&["2024txhou_f1m2", "2024txhou_f1m1"]);
    let table = format_match_schedule(&records);
    assert!(table.starts_with("\n **Finals** \n"));
    assert!(!table.contains("Qualifications"));
    assert!(!table.contains("Semifinals"));
    let rows = row_lines(&table);
    assert!(rows[0].starts_with("| Finals 1 |"));
    assert!(rows[1].starts_with("| Finals 2 |"));
}

#[test]
fn test_semifinal_example() {
    let key = "2024txhou_sf1m2";
    assert_eq!(trimmed_key(key), "sf1m2");
    assert_eq!(Round::classify(trimmed_key(key)), Round::Semifinal);
    let table = format_match_schedule(&[TestDataBuilder::match_record(key)]);
    assert!(row_lines(&table)[0].starts_with("| Match 1 |"));
}

#[test]
fn test_qualifications_non_decreasing() {
    let keys: Vec<String> = [17, 3, 12, 1, 9, 100, 45, 2]
        .iter()
        .map(|n| format!("2024txhou_qm{n}"))
        .collect();
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let table = format_match_schedule(&TestDataBuilder::match_records(&key_refs));

    let numbers: Vec<u32> = row_lines(&table)
        .iter()
        .filter_map(|l| l.strip_prefix("| Quals "))
        .filter_map(|rest| rest.split(' ').next())
        .filter_map(|n| n.parse().ok())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 9, 12, 17, 45, 100]);
}

#[test]
fn test_partitions_are_disjoint() {
    let records = TestDataBuilder::match_records(&[
        "2024txhou_qm1",
        "2024txhou_sf1m1",
        "2024txhou_f1m1",
        "2024txhou_qf1m1",
        "2024txhou_qm2",
    ]);
    let partitions = partition_matches(&records);
    assert_eq!(partitions.qualifications.len(), 2);
    assert_eq!(partitions.semifinals.len(), 1);
    assert_eq!(partitions.finals.len(), 1);

    for record in &records {
        let memberships = [
            partitions.qualifications.iter().any(|m| m.key == record.key),
            partitions.semifinals.iter().any(|m| m.key == record.key),
            partitions.finals.iter().any(|m| m.key == record.key),
        ];
        assert!(memberships.iter().filter(|&&in_round| in_round).count() <= 1);
    }
}

#[test]
fn test_full_event_schedule() {
    let mut records = TestDataBuilder::match_records(&[
        "2024txhou_f1m2",
        "2024txhou_qm2",
        "2024txhou_sf2m1",
        "2024txhou_qm1",
        "2024txhou_sf1m1",
        "2024txhou_f1m1",
    ]);
    records.push(TestDataBuilder::match_with_scores("2024txhou_f1m3", 70, 70, None, None));

    let table = format_match_schedule(&records);
    let labels: Vec<&str> = row_lines(&table)
        .iter()
        .filter_map(|l| l.split(" | ").next())
        .map(|l| l.trim_start_matches("| "))
        .collect();
    assert_eq!(
        labels,
        vec!["Quals 1", "Quals 2", "Match 1", "Match 2", "Finals 1", "Finals 2", "Finals 3"]
    );

    let qual_pos = table.find("**Qualifications**").unwrap();
    let semi_pos = table.find("\n **Semifinals** \n").unwrap();
    let final_pos = table.find("\n **Finals** \n").unwrap();
    assert!(qual_pos < semi_pos && semi_pos < final_pos);

    // unplayed tie: no bolding, dashes for missing scores
    assert!(table.contains("| Finals 3 | 254, 118, 1678 | 33, 67, 971 | 70 | 70 | - | - |\n"));
}

#[test]
fn test_malformed_keys_degrade_gracefully() {
    let records = TestDataBuilder::match_records(&["x_qmabc", "x_sf", "x_final", "garbage"]);
    let table = format_match_schedule(&records);
    let rows = row_lines(&table);
    assert_eq!(rows.len(), 3);
    assert!(table.contains("| qmabc |"));
    assert!(table.contains("| sf |"));
    assert!(table.contains("| final |"));
}

#[test]
fn test_unparseable_qualification_does_not_split_numbered_rows() {
    let records = TestDataBuilder::match_records(&[
        "2024txhou_qm3",
        "2024txhou_qm1",
        "2024txhou_qmx",
        "2024txhou_qm2",
    ]);
    let table = format_match_schedule(&records);
    let labels: Vec<&str> = row_lines(&table)
        .iter()
        .filter_map(|l| l.split(" | ").next())
        .map(|l| l.trim_start_matches("| "))
        .collect();
    assert_eq!(labels, vec!["Quals 1", "Quals 2", "Quals 3", "qmx"]);
}

#[test]
fn test_finals_fallback_order_is_case_insensitive() {
    let records = TestDataBuilder::match_records(&["2024x_fB", "2024x_fa"]);
    let table = format_match_schedule(&records);
    assert!(table.find("| fa |").unwrap() < table.find("| fB |").unwrap());
}
