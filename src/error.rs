use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a device driver while talking to a device.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("unsupported driver '{0}'")]
    UnsupportedDriver(String),

    #[error("could not resolve address {0}")]
    Resolve(String),

    #[error("connection failed: {0}")]
    Connect(#[from] std::io::Error),

    #[error("ssh error: {0}")]
    Ssh(#[from] ssh2::Error),

    #[error("authentication failed for user '{0}'")]
    Authentication(String),

    #[error("session is not open")]
    NotOpen,

    #[error("command '{command}' exited with status {status}")]
    Command { command: String, status: i32 },

    #[error("fact '{0}' missing from device output")]
    MissingFact(&'static str),
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T, E = InventoryError> = std::result::Result<T, E>;
