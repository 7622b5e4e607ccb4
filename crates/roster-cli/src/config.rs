//! Environment-driven run configuration.
//!
//! All behavior is fixed at deploy time through named environment settings;
//! the command line only controls logging. The configuration is built once
//! in `main` and passed by reference into each component.

use std::env;

use anyhow::{Context, Result, bail};

use roster_output::{Delimiter, TransferSettings};
use roster_source::DbSettings;

pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_CONNECT: &str = "DB_CONNECT";
pub const ENV_TRANSFER_USER: &str = "TRANSFER_USER";
pub const ENV_TRANSFER_PASSWORD: &str = "TRANSFER_PASSWORD";
pub const ENV_TRANSFER_HOST: &str = "TRANSFER_HOST";
pub const ENV_EXPORT_INCREMENTAL: &str = "EXPORT_INCREMENTAL";
pub const ENV_EXPORT_DELIMITER: &str = "EXPORT_DELIMITER";
pub const ENV_EXPORT_HEADER: &str = "EXPORT_HEADER";

/// Complete run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbSettings,
    pub transfer: TransferSettings,
    pub export: ExportOptions,
}

/// Behavior settings with deploy-time defaults.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Emit only records whose computed values differ from the values
    /// already stored downstream.
    pub incremental: bool,
    pub delimiter: Delimiter,
    pub header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            incremental: true,
            delimiter: Delimiter::default(),
            header: false,
        }
    }
}

impl Config {
    /// Read every setting from the environment.
    ///
    /// # Errors
    ///
    /// Fails when a required setting is unset or an optional switch holds an
    /// unparseable value. Configuration failures are fatal before any
    /// connection is opened.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db: DbSettings {
                user: require(ENV_DB_USER)?,
                password: require(ENV_DB_PASSWORD)?,
                connect: require(ENV_DB_CONNECT)?,
            },
            transfer: TransferSettings {
                user: require(ENV_TRANSFER_USER)?,
                password: require(ENV_TRANSFER_PASSWORD)?,
                host: require(ENV_TRANSFER_HOST)?,
            },
            export: ExportOptions::from_env()?,
        })
    }
}

impl ExportOptions {
    fn from_env() -> Result<Self> {
        let mut options = Self::default();
        if let Ok(value) = env::var(ENV_EXPORT_INCREMENTAL) {
            options.incremental = parse_switch(ENV_EXPORT_INCREMENTAL, &value)?;
        }
        if let Ok(value) = env::var(ENV_EXPORT_HEADER) {
            options.header = parse_switch(ENV_EXPORT_HEADER, &value)?;
        }
        if let Ok(value) = env::var(ENV_EXPORT_DELIMITER) {
            options.delimiter = match value.trim().to_lowercase().as_str() {
                "comma" => Delimiter::Comma,
                "tab" => Delimiter::Tab,
                other => bail!("{ENV_EXPORT_DELIMITER} must be comma or tab, got {other:?}"),
            };
        }
        Ok(options)
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("required environment setting {name} is not set"))
}

fn parse_switch(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{name} must be a boolean switch, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_parsing_accepts_common_spellings() {
        for value in ["1", "true", "YES", " on "] {
            assert!(parse_switch("TEST", value).unwrap(), "{value:?}");
        }
        for value in ["0", "false", "No", "off"] {
            assert!(!parse_switch("TEST", value).unwrap(), "{value:?}");
        }
        assert!(parse_switch("TEST", "maybe").is_err());
    }

    #[test]
    fn defaults_are_incremental_comma_no_header() {
        let options = ExportOptions::default();
        assert!(options.incremental);
        assert_eq!(options.delimiter, Delimiter::Comma);
        assert!(!options.header);
    }
}
