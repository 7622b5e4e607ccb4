//! Integration tests for the mapping crate.

use proptest::prelude::*;

use roster_map::{compute_values, diff_stored, race_symbol, yes_no};
use roster_model::{RawStudentRow, StoredValues};

#[test]
fn race_table_is_complete() {
    let expected = [
        (12, "I"),
        (13, "A"),
        (14, "B"),
        (15, "I"),
        (16, "W"),
        (17, "M"),
    ];
    for (code, symbol) in expected {
        assert_eq!(race_symbol(Some(code)), symbol, "code {code}");
    }
}

#[test]
fn out_of_table_codes_map_to_blank() {
    for code in [-1, 0, 1, 11, 18, 99, i64::MAX] {
        assert_eq!(race_symbol(Some(code)), "", "code {code}");
    }
    assert_eq!(race_symbol(None), "");
}

#[test]
fn compute_values_composes_all_three_fields() {
    let record = RawStudentRow {
        student_number: Some(123456),
        internal_id: Some("abc".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        ethnicity_flag: Some("1".to_string()),
        race_code: Some("14".to_string()),
        ..RawStudentRow::default()
    }
    .validate()
    .unwrap();

    let values = compute_values(&record, Some("1"));
    assert_eq!(values.ethnicity, "Y");
    assert_eq!(values.race, "B");
    assert_eq!(values.lep, "Y");

    // Absent lookup result defaults closed.
    let values = compute_values(&record, None);
    assert_eq!(values.lep, "N");
}

#[test]
fn sync_then_diff_round_trip() {
    let record = RawStudentRow {
        student_number: Some(123456),
        internal_id: Some("abc".to_string()),
        ethnicity_flag: Some("1".to_string()),
        race_code: Some("14".to_string()),
        stored_ethnicity: Some("Y".to_string()),
        stored_race: Some("B".to_string()),
        stored_lep: Some("Y".to_string()),
        ..RawStudentRow::default()
    }
    .validate()
    .unwrap();

    // Stored values match the computed ones, so nothing changes.
    let values = compute_values(&record, Some("1"));
    assert!(diff_stored(&values, &record.stored).is_empty());

    // A flipped proficiency flag is reported as exactly one change.
    let values = compute_values(&record, Some("0"));
    let changes = diff_stored(&values, &record.stored);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].field, "lep");
    assert_eq!(changes[0].before, "Y");
    assert_eq!(changes[0].after, "N");
}

proptest! {
    #[test]
    fn yes_only_for_the_literal_one(raw in "\\PC*") {
        let expected = if raw == "1" { "Y" } else { "N" };
        prop_assert_eq!(yes_no(Some(&raw)), expected);
    }

    #[test]
    fn diff_is_empty_iff_triples_are_equal(
        ethnicity in "[YN]",
        race in "[IABWM]?",
        lep in "[YN]",
    ) {
        let computed = roster_model::ComputedValues {
            ethnicity: ethnicity.clone(),
            race: race.clone(),
            lep: lep.clone(),
        };
        let stored = StoredValues {
            ethnicity: Some(ethnicity),
            race: Some(race),
            lep: Some(lep),
        };
        prop_assert!(diff_stored(&computed, &stored).is_empty());
    }
}
