//! JSON payloads exchanged with the browser.

pub mod active;

pub use active::ActiveUsers;
