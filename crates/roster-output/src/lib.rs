//! Export artifact output: the delimited roster file and its SFTP delivery.

pub mod error;
pub mod transfer;
pub mod writer;

pub use error::{TransferError, WriteError};
pub use transfer::{REMOTE_DIRECTORY, TransferSettings, upload_export};
pub use writer::{Delimiter, OUTPUT_FILE_NAME, RosterWriter, WriterOptions};
