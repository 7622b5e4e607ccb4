//! Tests for roster-model record validation.

use roster_model::{RawStudentRow, RecordError, StoredValues};

fn complete_row() -> RawStudentRow {
    RawStudentRow {
        student_number: Some(123456),
        internal_id: Some("abc".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        ethnicity_flag: Some("1".to_string()),
        race_code: Some("14".to_string()),
        stored_ethnicity: Some("Y".to_string()),
        stored_race: Some("B".to_string()),
        stored_lep: Some("N".to_string()),
    }
}

#[test]
fn complete_row_validates() {
    let record = complete_row().validate().unwrap();
    assert_eq!(record.student_number, 123456);
    assert_eq!(record.internal_id, "abc");
    assert_eq!(record.race_code, Some(14));
    assert_eq!(record.ethnicity_flag.as_deref(), Some("1"));
    assert_eq!(
        record.stored,
        StoredValues {
            ethnicity: Some("Y".to_string()),
            race: Some("B".to_string()),
            lep: Some("N".to_string()),
        }
    );
}

#[test]
fn missing_student_number_is_rejected() {
    let row = RawStudentRow {
        student_number: None,
        ..complete_row()
    };
    let error = row.validate().unwrap_err();
    assert_eq!(
        error,
        RecordError::MissingField {
            field: "student_number",
            identifier: "internal:abc".to_string(),
        }
    );
}

#[test]
fn missing_internal_id_is_rejected() {
    let row = RawStudentRow {
        internal_id: None,
        ..complete_row()
    };
    let error = row.validate().unwrap_err();
    assert_eq!(
        error,
        RecordError::MissingField {
            field: "internal_id",
            identifier: "123456".to_string(),
        }
    );
}

#[test]
fn non_numeric_race_code_is_rejected() {
    let row = RawStudentRow {
        race_code: Some("fourteen".to_string()),
        ..complete_row()
    };
    let error = row.validate().unwrap_err();
    assert!(matches!(
        error,
        RecordError::InvalidField {
            field: "race_code",
            ..
        }
    ));
}

#[test]
fn blank_race_code_validates_as_absent() {
    let row = RawStudentRow {
        race_code: Some("  ".to_string()),
        ..complete_row()
    };
    assert_eq!(row.validate().unwrap().race_code, None);
}

#[test]
fn identifier_prefers_student_number() {
    assert_eq!(complete_row().identifier(), "123456");
    let row = RawStudentRow {
        student_number: None,
        internal_id: None,
        ..complete_row()
    };
    assert_eq!(row.identifier(), "<unidentified>");
}
