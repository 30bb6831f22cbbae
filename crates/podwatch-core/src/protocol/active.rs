use serde::Serialize;

/// Body of the `/active` endpoint.
///
/// Fields are private so `has_active` is always derived from the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveUsers {
    active_users: usize,
    has_active: bool,
}

impl ActiveUsers {
    pub fn new(active_users: usize) -> Self {
        Self {
            active_users,
            has_active: active_users > 0,
        }
    }

    pub fn active_users(&self) -> usize {
        self.active_users
    }

    pub fn has_active(&self) -> bool {
        self.has_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_active_follows_count() {
        assert!(!ActiveUsers::new(0).has_active());
        assert!(ActiveUsers::new(1).has_active());
        assert_eq!(ActiveUsers::new(7).active_users(), 7);
    }
}
