//! Tests for the delimited export writer.

use roster_model::OutputRow;
use roster_output::{Delimiter, RosterWriter, WriterOptions};

fn row(student_number: i64, ethnicity: &str, race: &str, lep: &str) -> OutputRow {
    OutputRow {
        student_number,
        ethnicity: ethnicity.to_string(),
        race: race.to_string(),
        lep: lep.to_string(),
    }
}

fn write_rows(options: WriterOptions, rows: &[OutputRow]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raceethnicity.txt");
    let mut writer = RosterWriter::create(&path, options).unwrap();
    for row in rows {
        writer.write_row(row).unwrap();
    }
    writer.finish().unwrap();
    std::fs::read_to_string(&path).unwrap()
}

#[test]
fn comma_delimited_line_matches_importer_format() {
    let output = write_rows(WriterOptions::default(), &[row(123456, "Y", "B", "Y")]);
    assert_eq!(output, "123456,Y,B,Y\n");
}

#[test]
fn tab_delimiter_is_selectable() {
    let options = WriterOptions {
        delimiter: Delimiter::Tab,
        header: false,
    };
    let output = write_rows(options, &[row(123456, "Y", "B", "Y")]);
    assert_eq!(output, "123456\tY\tB\tY\n");
}

#[test]
fn header_is_a_single_literal_line() {
    let options = WriterOptions {
        delimiter: Delimiter::Comma,
        header: true,
    };
    let output = write_rows(options, &[row(123456, "N", "W", "N")]);
    assert_eq!(output, "Student_Number,Ethnicity,Race,LEP\n123456,N,W,N\n");
}

#[test]
fn blank_race_stays_an_empty_column() {
    let output = write_rows(WriterOptions::default(), &[row(123456, "N", "", "N")]);
    assert_eq!(output, "123456,N,,N\n");
}

#[test]
fn arrival_order_is_preserved() {
    let output = write_rows(
        WriterOptions::default(),
        &[row(222222, "Y", "I", "N"), row(111111, "N", "M", "Y")],
    );
    assert_eq!(output, "222222,Y,I,N\n111111,N,M,Y\n");
}

#[test]
fn record_count_excludes_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raceethnicity.txt");
    let options = WriterOptions {
        delimiter: Delimiter::Comma,
        header: true,
    };
    let mut writer = RosterWriter::create(&path, options).unwrap();
    assert_eq!(writer.records(), 0);
    writer.write_row(&row(1, "N", "", "N")).unwrap();
    writer.write_row(&row(2, "Y", "A", "N")).unwrap();
    assert_eq!(writer.records(), 2);
    writer.finish().unwrap();
}

#[test]
fn empty_run_produces_empty_file() {
    let output = write_rows(WriterOptions::default(), &[]);
    assert_eq!(output, "");
}
