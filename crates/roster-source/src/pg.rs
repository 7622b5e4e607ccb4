//! Postgres implementation of the demographics source.

use roster_model::RawStudentRow;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info, warn};

use crate::DemographicsSource;
use crate::error::SourceError;
use crate::queries::{LEP_QUERY, ROSTER_QUERY};

/// Connection settings for the student database.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub user: String,
    pub password: String,
    /// host:port/database, deployed alongside the credentials.
    pub connect: String,
}

impl DbSettings {
    fn url(&self) -> String {
        format!("postgres://{}:{}@{}", self.user, self.password, self.connect)
    }
}

/// One pool, one logical connection, strictly sequential queries.
pub struct PgSource {
    pool: PgPool,
}

impl PgSource {
    /// Establish the connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Connect`] when the pool cannot be established;
    /// the caller aborts the run.
    pub async fn connect(settings: &DbSettings) -> Result<Self, SourceError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&settings.url())
            .await
            .map_err(|source| SourceError::Connect { source })?;
        info!("connected to student database");
        Ok(Self { pool })
    }
}

impl DemographicsSource for PgSource {
    async fn fetch_roster(&self) -> Result<Vec<RawStudentRow>, SourceError> {
        let rows = sqlx::query(ROSTER_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| SourceError::RosterQuery { source })?;
        debug!(count = rows.len(), "bulk roster query returned");
        Ok(rows.iter().map(raw_row).collect())
    }

    async fn lep_flag(&self, internal_id: &str) -> Result<Option<String>, SourceError> {
        let rows = sqlx::query(LEP_QUERY)
            .bind(internal_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| SourceError::LepLookup {
                internal_id: internal_id.to_string(),
                source,
            })?;
        // Zero rows is a normal "no flag". Extra rows are not expected but
        // not rejected either: the first wins.
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| decode_column(&row, "lep")))
    }
}

/// Convert one bulk-query row with every column treated as nullable.
///
/// An undecodable column is logged and treated as absent so the record fails
/// validation on its own instead of aborting the fetch.
fn raw_row(row: &PgRow) -> RawStudentRow {
    RawStudentRow {
        student_number: decode_column(row, "student_number"),
        internal_id: decode_column(row, "dcid"),
        first_name: decode_column(row, "first_name"),
        last_name: decode_column(row, "last_name"),
        ethnicity_flag: decode_column(row, "fed_ethnicity"),
        race_code: decode_column(row, "fer"),
        stored_ethnicity: decode_column(row, "custom_ethnicity"),
        stored_race: decode_column(row, "custom_race"),
        stored_lep: decode_column(row, "custom_lep"),
    }
}

fn decode_column<'r, T>(row: &'r PgRow, column: &str) -> Option<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    match row.try_get::<Option<T>, _>(column) {
        Ok(value) => value,
        Err(error) => {
            warn!(column, %error, "unreadable column treated as absent");
            None
        }
    }
}
