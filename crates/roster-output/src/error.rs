//! Error types for file output and transfer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while writing the local export file. Fatal: without the artifact
/// there is nothing to deliver.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Could not create the output file.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record failed to serialize.
    #[error("failed to write record: {0}")]
    Record(#[from] csv::Error),

    /// Could not flush the file to disk.
    #[error("failed to flush export file: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },
}

/// Errors while delivering the export file.
///
/// All transfer errors are recovered at top level: the local file stays in
/// place for manual recovery.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Could not reach the transfer endpoint.
    #[error("failed to reach {host}: {source}")]
    Connect {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// SSH session setup or handshake failed.
    #[error("ssh session setup failed: {source}")]
    Session {
        #[source]
        source: ssh2::Error,
    },

    /// Password authentication was rejected.
    #[error("authentication failed for {user}: {source}")]
    Auth {
        user: String,
        #[source]
        source: ssh2::Error,
    },

    /// The server's host key did not pass known_hosts validation.
    #[error("host key for {host} failed known_hosts validation")]
    HostKey { host: String },

    /// An SFTP operation failed.
    #[error("sftp error: {source}")]
    Sftp {
        #[source]
        source: ssh2::Error,
    },

    /// Could not read the finished local file back for upload.
    #[error("failed to read local file {path}: {source}")]
    LocalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying bytes to the remote file failed mid-stream.
    #[error("failed to upload {path}: {source}")]
    Upload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
