//! Error types for access point setup

use std::path::PathBuf;

use thiserror::Error;

/// Result type for host command invocations
pub type CommandResult<T> = Result<T, CommandError>;

/// Result type for access point operations
pub type ApResult<T> = Result<T, ApError>;

/// Errors raised while invoking a host command
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A required package could not be installed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to install {package}")]
pub struct InstallError {
    pub package: String,
    /// Captured output of the failed install command
    pub failed_output: String,
}

/// Errors that abort an access point operation
#[derive(Error, Debug)]
pub enum ApError {
    #[error(transparent)]
    Install(#[from] InstallError),

    #[error("Failed to write {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
