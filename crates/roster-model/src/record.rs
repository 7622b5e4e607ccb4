//! Student record types as they move through the pipeline.

use serde::Serialize;

use crate::error::RecordError;

/// One row from the bulk roster query, before validation.
///
/// Every field is optional: a malformed row must surface as a per-record
/// error, never abort the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStudentRow {
    /// Stable external ID, the first field of the export line.
    pub student_number: Option<i64>,
    /// Opaque key for the secondary proficiency lookup.
    pub internal_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Ethnicity flag as stored upstream, usually "1" or "0".
    pub ethnicity_flag: Option<String>,
    /// Race code as stored upstream, a small integer in text form.
    pub race_code: Option<String>,
    /// Ethnicity value already stored downstream.
    pub stored_ethnicity: Option<String>,
    /// Race symbol already stored downstream.
    pub stored_race: Option<String>,
    /// Proficiency value already stored downstream.
    pub stored_lep: Option<String>,
}

impl RawStudentRow {
    /// Promote a raw row to a validated [`StudentRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] when the student number or the
    /// internal ID is absent, and [`RecordError::InvalidField`] when the race
    /// code is present but not an integer. The error carries the best
    /// identifier available for the log line.
    pub fn validate(self) -> Result<StudentRecord, RecordError> {
        let identifier = self.identifier();
        let student_number = self
            .student_number
            .ok_or_else(|| RecordError::MissingField {
                field: "student_number",
                identifier: identifier.clone(),
            })?;
        let internal_id = self.internal_id.ok_or_else(|| RecordError::MissingField {
            field: "internal_id",
            identifier: identifier.clone(),
        })?;
        let race_code = match self.race_code.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(text.parse::<i64>().map_err(|_| RecordError::InvalidField {
                field: "race_code",
                value: text.to_string(),
                identifier,
            })?),
        };
        Ok(StudentRecord {
            student_number,
            internal_id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            ethnicity_flag: self.ethnicity_flag,
            race_code,
            stored: StoredValues {
                ethnicity: self.stored_ethnicity,
                race: self.stored_race,
                lep: self.stored_lep,
            },
        })
    }

    /// Best identifier for log lines about this row.
    #[must_use]
    pub fn identifier(&self) -> String {
        match (self.student_number, self.internal_id.as_deref()) {
            (Some(number), _) => number.to_string(),
            (None, Some(id)) => format!("internal:{id}"),
            (None, None) => "<unidentified>".to_string(),
        }
    }
}

/// A validated student record, immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub student_number: i64,
    pub internal_id: String,
    /// Used only by the exclusion filter.
    pub first_name: String,
    /// Used only by the exclusion filter.
    pub last_name: String,
    pub ethnicity_flag: Option<String>,
    pub race_code: Option<i64>,
    /// Values already stored downstream, for incremental comparison.
    pub stored: StoredValues,
}

/// The three previously stored downstream values for one student.
///
/// Absent values compare as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredValues {
    pub ethnicity: Option<String>,
    pub race: Option<String>,
    pub lep: Option<String>,
}

/// The freshly mapped export triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedValues {
    pub ethnicity: String,
    pub race: String,
    pub lep: String,
}

/// One line of the export file, fields in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub student_number: i64,
    pub ethnicity: String,
    pub race: String,
    pub lep: String,
}

impl OutputRow {
    /// Assemble the export line for one student.
    #[must_use]
    pub fn new(student_number: i64, values: &ComputedValues) -> Self {
        Self {
            student_number,
            ethnicity: values.ethnicity.clone(),
            race: values.race.clone(),
            lep: values.lep.clone(),
        }
    }
}
