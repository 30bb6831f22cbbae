use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// How long a visitor counts as active after its last heartbeat.
pub const PRESENCE_TTL: Duration = Duration::from_secs(120);

/// Last heartbeat seen for one visitor key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitorRecord {
    pub last_seen_at: Instant,
}

impl VisitorRecord {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_seen_at) > PRESENCE_TTL
    }
}

/// Source of "now" for the tracker.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Monotonic wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Presence set: visitor_key -> last heartbeat.
///
/// A single mutex guards the whole map. Eviction happens only on the read
/// path (`cleanup` / `active_count`); there is no background sweep, so stale
/// entries may sit in the map until the next read.
pub struct PresenceTracker {
    visitors: Mutex<HashMap<String, VisitorRecord>>,
    clock: Arc<dyn Clock>,
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PresenceTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceTracker")
            .field("visitors", &self.visitors)
            .finish_non_exhaustive()
    }
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            visitors: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Register or refresh `key` as seen now.
    pub fn heartbeat(&self, key: &str) {
        self.heartbeat_at(key, self.clock.now());
    }

    /// Drop every visitor whose last heartbeat is older than [`PRESENCE_TTL`].
    pub fn cleanup(&self) {
        self.cleanup_at(self.clock.now());
    }

    /// Prune expired visitors, then return how many remain.
    pub fn active_count(&self) -> usize {
        self.active_count_at(self.clock.now())
    }

    pub fn heartbeat_at(&self, key: &str, now: Instant) {
        let mut visitors = self.lock();
        match visitors.get_mut(key) {
            // Keep last_seen_at monotonic if callers race with older instants.
            Some(rec) => rec.last_seen_at = rec.last_seen_at.max(now),
            None => {
                visitors.insert(key.to_string(), VisitorRecord { last_seen_at: now });
            }
        }
    }

    pub fn cleanup_at(&self, now: Instant) {
        let mut visitors = self.lock();
        Self::evict_expired(&mut visitors, now);
    }

    pub fn active_count_at(&self, now: Instant) -> usize {
        // Evict and count under one guard so the result matches `now`.
        let mut visitors = self.lock();
        Self::evict_expired(&mut visitors, now);
        visitors.len()
    }

    /// Snapshot of a single visitor, without pruning.
    pub fn get(&self, key: &str) -> Option<VisitorRecord> {
        self.lock().get(key).copied()
    }

    /// Number of stored entries including ones not yet evicted.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn evict_expired(visitors: &mut HashMap<String, VisitorRecord>, now: Instant) {
        let before = visitors.len();
        visitors.retain(|_, rec| !rec.is_expired(now));
        let evicted = before - visitors.len();
        if evicted > 0 {
            tracing::trace!(evicted, remaining = visitors.len(), "presence entries expired");
        }
    }

    // The map stays structurally valid even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, VisitorRecord>> {
        self.visitors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
