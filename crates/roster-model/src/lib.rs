//! Core data types for the student demographics export.
//!
//! Records flow through the pipeline in one direction: a [`RawStudentRow`]
//! comes off the bulk query with every column still optional, validation
//! promotes it to a [`StudentRecord`], mapping produces [`ComputedValues`],
//! and an emitted record becomes one [`OutputRow`] in the export file.

pub mod error;
pub mod record;

pub use error::RecordError;
pub use record::{ComputedValues, OutputRow, RawStudentRow, StoredValues, StudentRecord};
