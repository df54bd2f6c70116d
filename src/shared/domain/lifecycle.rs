use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::utils::time;

/// Timestamps and soft-delete state shared by every aggregate.
///
/// `updated_at >= created_at` always holds, and every mutation moves
/// `updated_at` strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifecycle {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    active: bool,
}

impl Lifecycle {
    pub fn new(active: bool) -> Self {
        let now = time::now();
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
            active,
        }
    }

    /// Rebuilds persisted state. An `updated_at` earlier than `created_at` is raised to it.
    pub fn restore(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
        active: bool,
    ) -> Self {
        Self {
            created_at,
            updated_at: updated_at.max(created_at),
            deleted_at,
            active,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = time::now_after(self.updated_at);
    }

    pub fn activate(&mut self) {
        self.deleted_at = None;
        self.active = true;
        self.touch();
    }

    /// Soft delete. The first deactivation instant is kept across repeated calls.
    pub fn deactivate(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(time::now_after(self.updated_at));
        }
        self.active = false;
        self.touch();
    }

    pub fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_active_lifecycle_has_equal_timestamps() {
        let lifecycle = Lifecycle::new(true);

        assert!(lifecycle.is_active());
        assert_eq!(lifecycle.created_at(), lifecycle.updated_at());
        assert!(lifecycle.deleted_at().is_none());
    }

    #[test]
    fn new_inactive_lifecycle_is_deleted_at_creation() {
        let lifecycle = Lifecycle::new(false);

        assert!(!lifecycle.is_active());
        assert_eq!(lifecycle.deleted_at(), Some(lifecycle.created_at()));
    }

    #[test]
    fn deactivate_then_activate_moves_updated_at_forward() {
        let mut lifecycle = Lifecycle::new(true);

        lifecycle.deactivate();
        let deactivated_at = lifecycle.updated_at();
        assert!(!lifecycle.is_active());
        assert!(lifecycle.deleted_at().is_some());

        lifecycle.activate();
        assert!(lifecycle.is_active());
        assert!(lifecycle.deleted_at().is_none());
        assert!(lifecycle.updated_at() > deactivated_at);
    }

    #[test]
    fn repeated_deactivation_keeps_first_deleted_at() {
        let mut lifecycle = Lifecycle::new(true);
        lifecycle.deactivate();
        let first = lifecycle.deleted_at();

        lifecycle.deactivate();
        assert_eq!(lifecycle.deleted_at(), first);
    }

    #[test]
    fn restore_never_lets_updated_precede_created() {
        let created = time::now();
        let lifecycle = Lifecycle::restore(created, created - Duration::hours(1), None, true);

        assert_eq!(lifecycle.updated_at(), created);
    }
}
