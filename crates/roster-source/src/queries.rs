//! SQL text for the two queries the export issues.
//!
//! Flag and code columns are cast to text in SQL so the Rust side sees one
//! shape regardless of how the upstream schema stores them.

/// Bulk roster query: one row per actively enrolled student, joined with the
/// demographics extension and the downstream custom-field extension. The
/// descending student-number order carries through to the export file
/// unchanged.
pub const ROSTER_QUERY: &str = "\
SELECT s.student_number, \
       CAST(s.fed_ethnicity AS TEXT) AS fed_ethnicity, \
       CAST(d.fer AS TEXT) AS fer, \
       CAST(s.dcid AS TEXT) AS dcid, \
       s.first_name, \
       s.last_name, \
       c.custom_ethnicity, \
       c.custom_race, \
       c.custom_lep \
FROM students s \
LEFT JOIN student_demographics_ext d ON s.dcid = d.students_dcid \
LEFT JOIN student_custom_fields c ON s.dcid = c.students_dcid \
WHERE s.enroll_status = 0 \
ORDER BY s.student_number DESC";

/// Proficiency lookup keyed by the student's internal ID. Zero rows is a
/// normal "no flag"; the caller treats extra rows as first-wins.
pub const LEP_QUERY: &str = "\
SELECT CAST(lep AS TEXT) AS lep \
FROM student_language_ext \
WHERE CAST(students_dcid AS TEXT) = $1";
