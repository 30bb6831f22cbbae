//! Shared error type across podwatch crates.

use std::net::SocketAddr;

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PodwatchError>;

/// Unified error type used by core and server.
///
/// Only process-level failures live here. Presence tracking and page
/// rendering have no error path.
#[derive(Debug, Error)]
pub enum PodwatchError {
    /// The listener could not be bound (port in use, missing privilege).
    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The accept loop stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl PodwatchError {
    /// Short stable label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PodwatchError::Bind { .. } => "BIND",
            PodwatchError::Serve(_) => "SERVE",
        }
    }
}
