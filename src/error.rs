//! Error types for the serial link

use std::fmt;

use tokio::task::JoinError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the connection itself
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// The device could not be opened (missing, busy, permission denied)
    #[error("could not open {device} at {baud_rate} baud: {source}")]
    Open {
        device: String,
        baud_rate: u32,
        #[source]
        source: tokio_serial::Error,
    },

    /// Read or write failed on an open connection
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device side went away
    #[error("connection closed by device")]
    Closed,
}

/// Inbound bytes that are not ASCII text
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("non-ASCII byte {byte:#04x} at offset {offset}")]
pub struct DecodeError {
    pub offset: usize,
    pub byte: u8,
}

/// The two activities sharing a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Reader,
    Writer,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Reader => write!(f, "reader"),
            Task::Writer => write!(f, "writer"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A task panicked or was cancelled outside the supervisor
    #[error("{0} task aborted: {1}")]
    Aborted(Task, #[source] JoinError),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Connection(ConnectionError::Io(e))
    }
}
