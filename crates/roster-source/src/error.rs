//! Error types for the database layer.

use thiserror::Error;

/// Errors from the student database.
///
/// `Connect` and `RosterQuery` are fatal and abort the run; `LepLookup` is
/// recovered at record scope.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Could not establish the connection pool.
    #[error("failed to connect to student database: {source}")]
    Connect {
        #[source]
        source: sqlx::Error,
    },

    /// The bulk roster query failed.
    #[error("roster query failed: {source}")]
    RosterQuery {
        #[source]
        source: sqlx::Error,
    },

    /// A per-student proficiency lookup failed.
    #[error("proficiency lookup for {internal_id} failed: {source}")]
    LepLookup {
        internal_id: String,
        #[source]
        source: sqlx::Error,
    },
}
