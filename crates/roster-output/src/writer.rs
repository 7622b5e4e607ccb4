//! Delimited export file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use roster_model::OutputRow;

use crate::error::WriteError;

/// Fixed local artifact name; overwritten every run.
pub const OUTPUT_FILE_NAME: &str = "raceethnicity.txt";

/// Column names for the optional header line.
const HEADER: [&str; 4] = ["Student_Number", "Ethnicity", "Race", "LEP"];

/// Field delimiter for the export file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma-separated, the documented downstream default.
    #[default]
    Comma,
    /// Tab-separated, for importers that expect it.
    Tab,
}

impl Delimiter {
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }
}

/// Writer configuration: the delimiter plus the single header choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterOptions {
    pub delimiter: Delimiter,
    /// Emit one literal header line before the records. Never both behaviors
    /// at once; off by default.
    pub header: bool,
}

/// Serializes emitted records one line at a time, in arrival order.
///
/// The upstream query already orders rows; no re-sorting happens here.
pub struct RosterWriter<W: Write> {
    inner: csv::Writer<W>,
    records: usize,
}

impl RosterWriter<BufWriter<File>> {
    /// Create (truncating) the export file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Create`] when the file cannot be created, and
    /// [`WriteError::Record`] when the header line cannot be written.
    pub fn create(path: &Path, options: WriterOptions) -> Result<Self, WriteError> {
        let file = File::create(path).map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_writer(BufWriter::new(file), options)
    }
}

impl<W: Write> RosterWriter<W> {
    /// Wrap an arbitrary writer; used directly by tests.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Record`] when the header line cannot be written.
    pub fn from_writer(writer: W, options: WriterOptions) -> Result<Self, WriteError> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(options.delimiter.as_byte())
            .has_headers(false)
            .from_writer(writer);
        if options.header {
            inner.write_record(HEADER)?;
        }
        Ok(Self { inner, records: 0 })
    }

    /// Append one emitted record.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Record`] when serialization fails.
    pub fn write_row(&mut self, row: &OutputRow) -> Result<(), WriteError> {
        self.inner.serialize(row)?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far, header excluded.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flush everything to the underlying writer and release it.
    ///
    /// The caller must finish the file before handing it to the transfer
    /// client: write-then-upload, never interleaved.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Flush`] when the final flush fails.
    pub fn finish(mut self) -> Result<(), WriteError> {
        self.inner
            .flush()
            .map_err(|source| WriteError::Flush { source })
    }
}
