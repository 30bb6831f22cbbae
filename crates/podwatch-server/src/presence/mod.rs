//! Visitor presence tracking.
//!
//! An expiring set of visitor keys refreshed by heartbeats and pruned lazily
//! whenever the active count is read.

mod tracker;

pub use tracker::{Clock, PresenceTracker, SystemClock, VisitorRecord, PRESENCE_TTL};
