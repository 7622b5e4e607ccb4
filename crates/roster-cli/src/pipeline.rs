//! The export pipeline with explicit stages.
//!
//! Stages run strictly in order:
//! 1. **Fetch**: one bulk roster query, then one proficiency lookup per record
//! 2. **Map**: fixed-vocabulary translation to partner values
//! 3. **Filter**: exclusion list first, then (incremental) change detection
//! 4. **Write**: delimited lines in query order
//! 5. **Transfer**: SFTP upload of the finished file
//!
//! Per-record processing is a pure mapping step plus a collector. The
//! collector owns the skip-and-continue policy: a failing record is logged
//! with its identifier and counted, never aborting the run. Only the bulk
//! query, the output file, and the connection itself are fatal.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use roster_map::{ExclusionList, compute_values, diff_stored};
use roster_model::{OutputRow, RawStudentRow, RecordError};
use roster_output::{OUTPUT_FILE_NAME, RosterWriter, WriterOptions, upload_export};
use roster_source::DemographicsSource;

use crate::config::{Config, ExportOptions};
use crate::types::{Processed, RunSummary};

/// One record's journey through validation, map, and filter.
///
/// Every failure is returned rather than logged here, so the collector can
/// apply the skip-and-continue policy in one place.
async fn process_record<S: DemographicsSource>(
    source: &S,
    exclusions: &ExclusionList,
    incremental: bool,
    raw: RawStudentRow,
) -> Result<Processed, RecordError> {
    // Exclusion runs before anything else so test accounts never cost a
    // secondary lookup.
    let first = raw.first_name.as_deref().unwrap_or("");
    let last = raw.last_name.as_deref().unwrap_or("");
    if exclusions.is_excluded(first, last) {
        return Ok(Processed::Excluded);
    }

    let record = raw.validate()?;
    let lep_raw = source
        .lep_flag(&record.internal_id)
        .await
        .map_err(|error| RecordError::Lookup {
            message: error.to_string(),
        })?;
    let values = compute_values(&record, lep_raw.as_deref());
    debug!(
        student = record.student_number,
        race_code = ?record.race_code,
        race = %values.race,
        ethnicity_flag = ?record.ethnicity_flag,
        lep_raw = ?lep_raw,
        "mapped student record"
    );

    let changes = if incremental {
        let changes = diff_stored(&values, &record.stored);
        if changes.is_empty() {
            return Ok(Processed::Unchanged);
        }
        changes
    } else {
        Vec::new()
    };
    Ok(Processed::Emitted {
        row: OutputRow::new(record.student_number, &values),
        changes,
    })
}

/// Run fetch, map, and filter over an open source, appending emitted records
/// to `writer` in query order.
///
/// # Errors
///
/// Only fatal failures propagate: the bulk roster query and the export file
/// itself. Per-record failures land in the summary.
pub async fn collect_roster<S, W>(
    source: &S,
    options: &ExportOptions,
    writer: &mut RosterWriter<W>,
) -> Result<RunSummary>
where
    S: DemographicsSource,
    W: Write,
{
    let exclusions = ExclusionList::default();
    let rows = source
        .fetch_roster()
        .await
        .context("bulk roster query failed")?;
    info!(count = rows.len(), "fetched roster rows");
    let mut summary = RunSummary {
        fetched: rows.len(),
        ..RunSummary::default()
    };

    for raw in rows {
        let identifier = raw.identifier();
        match process_record(source, &exclusions, options.incremental, raw).await {
            Ok(Processed::Emitted { row, changes }) => {
                for change in &changes {
                    info!(
                        student = row.student_number,
                        field = change.field,
                        before = %change.before,
                        after = %change.after,
                        "field value changing"
                    );
                }
                writer.write_row(&row).context("write export record")?;
                summary.emitted += 1;
            }
            Ok(Processed::Excluded) => {
                debug!(student = %identifier, "excluded test account");
                summary.excluded += 1;
            }
            Ok(Processed::Unchanged) => {
                summary.unchanged += 1;
            }
            Err(record_error) => {
                error!(student = %identifier, error = %record_error, "skipping record");
                summary.failures.push((identifier, record_error.to_string()));
            }
        }
    }
    Ok(summary)
}

/// Execute one full export run: write the file, then deliver it.
///
/// The writer is finished and dropped before the transfer client starts;
/// write-then-upload is never interleaved. A failed upload is logged and the
/// local file retained — the run still reports completion.
///
/// # Errors
///
/// Fatal failures only (bulk query, output file).
pub async fn run_export<S: DemographicsSource>(source: &S, config: &Config) -> Result<RunSummary> {
    let output_path = Path::new(OUTPUT_FILE_NAME);
    let mut summary = {
        let mut writer = RosterWriter::create(
            output_path,
            WriterOptions {
                delimiter: config.export.delimiter,
                header: config.export.header,
            },
        )?;
        let summary = collect_roster(source, &config.export, &mut writer).await?;
        writer.finish()?;
        summary
    };
    info!(
        records = summary.emitted,
        path = %output_path.display(),
        "export file written"
    );

    match upload_export(&config.transfer, output_path, OUTPUT_FILE_NAME) {
        Ok(()) => summary.uploaded = true,
        Err(transfer_error) => {
            error!(
                error = %transfer_error,
                path = %output_path.display(),
                "upload failed, local file retained"
            );
            summary.uploaded = false;
        }
    }
    Ok(summary)
}
