//! Result types for the export run.

use roster_map::FieldChange;
use roster_model::OutputRow;

/// One record's outcome after map and filter.
#[derive(Debug)]
pub enum Processed {
    /// Written to the export file. `changes` holds the audit trail in
    /// incremental mode and is empty otherwise.
    Emitted {
        row: OutputRow,
        changes: Vec<FieldChange>,
    },
    /// Matched the test-account exclusion list; no lookup was issued.
    Excluded,
    /// Incremental mode found every field already in sync.
    Unchanged,
}

/// Counts and failures accumulated over one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub emitted: usize,
    pub excluded: usize,
    pub unchanged: usize,
    /// Skipped records: best identifier plus the error text.
    pub failures: Vec<(String, String)>,
    /// Whether the upload step succeeded; the local file survives either way.
    pub uploaded: bool,
}
