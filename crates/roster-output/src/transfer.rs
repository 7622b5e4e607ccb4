//! SFTP delivery of the finished export file.
//!
//! Upload happens strictly after the local file is written and closed. A
//! failed upload leaves the local file in place for manual recovery.

use std::fs::File;
use std::net::TcpStream;
use std::path::Path;

use ssh2::{CheckResult, KnownHostFileKind, Session};
use tracing::{info, warn};

use crate::error::TransferError;

/// Remote directory the partner ingests from. The filename inside it is
/// fixed and overwritten each run; no versioning.
pub const REMOTE_DIRECTORY: &str = "./sftp/clever";

/// Local OpenSSH known_hosts file used for host key validation.
pub const KNOWN_HOSTS_FILE: &str = "known_hosts";

/// Endpoint settings for the transfer session.
#[derive(Debug, Clone)]
pub struct TransferSettings {
    /// Hostname, with an optional `:port`; port 22 assumed otherwise.
    pub host: String,
    pub user: String,
    pub password: String,
}

/// Upload `local_path` into the fixed remote directory as `file_name`,
/// overwriting any previous run's file.
///
/// # Errors
///
/// Any [`TransferError`]; the caller logs it and keeps the local file.
pub fn upload_export(
    settings: &TransferSettings,
    local_path: &Path,
    file_name: &str,
) -> Result<(), TransferError> {
    let address = if settings.host.contains(':') {
        settings.host.clone()
    } else {
        format!("{}:22", settings.host)
    };
    let stream = TcpStream::connect(&address).map_err(|source| TransferError::Connect {
        host: address.clone(),
        source,
    })?;

    let mut session = Session::new().map_err(|source| TransferError::Session { source })?;
    session.set_tcp_stream(stream);
    session
        .handshake()
        .map_err(|source| TransferError::Session { source })?;
    verify_host_key(&session, &settings.host)?;
    session
        .userauth_password(&settings.user, &settings.password)
        .map_err(|source| TransferError::Auth {
            user: settings.user.clone(),
            source,
        })?;
    info!(host = %settings.host, "sftp session established");

    let sftp = session
        .sftp()
        .map_err(|source| TransferError::Sftp { source })?;
    let remote_path = Path::new(REMOTE_DIRECTORY).join(file_name);
    let mut local = File::open(local_path).map_err(|source| TransferError::LocalRead {
        path: local_path.to_path_buf(),
        source,
    })?;
    let mut remote = sftp
        .create(&remote_path)
        .map_err(|source| TransferError::Sftp { source })?;
    std::io::copy(&mut local, &mut remote).map_err(|source| TransferError::Upload {
        path: local_path.to_path_buf(),
        source,
    })?;
    info!(remote = %remote_path.display(), "export file placed on remote server");
    Ok(())
}

/// Check the server's host key against the local known_hosts file.
///
/// A missing file logs a warning and proceeds; a present file with an
/// unknown or mismatched key aborts the upload.
fn verify_host_key(session: &Session, host: &str) -> Result<(), TransferError> {
    let path = Path::new(KNOWN_HOSTS_FILE);
    if !path.exists() {
        warn!("no known_hosts file found, skipping host key validation");
        return Ok(());
    }
    let mut known_hosts = session
        .known_hosts()
        .map_err(|source| TransferError::Session { source })?;
    known_hosts
        .read_file(path, KnownHostFileKind::OpenSSH)
        .map_err(|source| TransferError::Session { source })?;
    let Some((key, _)) = session.host_key() else {
        return Err(TransferError::HostKey {
            host: host.to_string(),
        });
    };
    match known_hosts.check(host, key) {
        CheckResult::Match => Ok(()),
        CheckResult::NotFound | CheckResult::Mismatch | CheckResult::Failure => {
            Err(TransferError::HostKey {
                host: host.to_string(),
            })
        }
    }
}
