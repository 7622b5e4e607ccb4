//! Pure mapping logic for the demographics export.
//!
//! This crate holds the translation the system exists for: the fixed
//! race-code vocabulary, the Y/N flag collapse, the test-account exclusion
//! list, and the incremental change diff. Everything here is pure and
//! synchronous; all I/O lives in the neighboring crates.

pub mod change;
pub mod codes;
pub mod exclusion;

pub use change::{FieldChange, diff_stored};
pub use codes::{compute_values, race_symbol, yes_no};
pub use exclusion::ExclusionList;
