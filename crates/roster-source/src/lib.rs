//! Database contract for the demographics export.
//!
//! The pipeline consumes a [`DemographicsSource`]: one bulk roster query per
//! run, then one proficiency lookup per surviving record. [`PgSource`] is the
//! production implementation over sqlx; tests substitute an in-memory fake.

pub mod error;
pub mod pg;
pub mod queries;

pub use error::SourceError;
pub use pg::{DbSettings, PgSource};

use roster_model::RawStudentRow;

/// Query contract the pipeline consumes.
#[allow(async_fn_in_trait)]
pub trait DemographicsSource {
    /// Fetch one row per actively enrolled student, descending by student
    /// number. The export file preserves this order.
    async fn fetch_roster(&self) -> Result<Vec<RawStudentRow>, SourceError>;

    /// Fetch the raw proficiency flag for one student.
    ///
    /// `None` when the extension table has no row for the student; when it
    /// unexpectedly has several, the first wins and the rest are ignored.
    async fn lep_flag(&self, internal_id: &str) -> Result<Option<String>, SourceError>;
}
