//! podwatch server library entry.
//!
//! Wires configuration, the presence tracker, the index page and the HTTP
//! handlers into one axum application. Consumed by the binary (`main.rs`)
//! and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod page;
pub mod presence;
pub mod router;
pub mod server;
