//! podwatch core: error types and the JSON shapes served over HTTP.
//!
//! This crate carries no transport or runtime dependencies so the wire
//! contract can be shared by the server and by test tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{PodwatchError, Result};
