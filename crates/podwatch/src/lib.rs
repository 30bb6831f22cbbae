//! Top-level facade crate for podwatch.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use podwatch_core::*;
}

pub mod server {
    pub use podwatch_server::*;
}
