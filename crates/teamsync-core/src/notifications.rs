//! Notification Store
//!
//! `read` only ever moves from false to true; dismiss removes the entry.

use crate::error::DashboardError;
use crate::types::{Notification, NotificationId};

/// Notifications for the current user, fixture order
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    items: Vec<Notification>,
}

impl NotificationStore {
    /// Create store from seed notifications
    #[inline]
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Mark one notification read
    ///
    /// Returns `true` if the flag changed, `false` if it was already read.
    ///
    /// # Errors
    /// `DashboardError::NotificationNotFound` if absent.
    pub fn mark_read(&mut self, id: &NotificationId) -> Result<bool, DashboardError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| DashboardError::NotificationNotFound(id.clone()))?;

        let changed = !item.read;
        item.read = true;
        Ok(changed)
    }

    /// Mark every notification read; returns how many changed
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|n| !n.read) {
            item.read = true;
            changed += 1;
        }
        tracing::debug!("Marked {} notifications read", changed);
        changed
    }

    /// Remove a notification
    ///
    /// # Errors
    /// `DashboardError::NotificationNotFound` if absent; the collection is
    /// left unchanged.
    pub fn dismiss(&mut self, id: &NotificationId) -> Result<Notification, DashboardError> {
        let idx = self
            .items
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DashboardError::NotificationNotFound(id.clone()))?;
        Ok(self.items.remove(idx))
    }

    /// Look up a notification
    #[inline]
    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| &n.id == id)
    }

    /// Number of unread notifications
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// All notifications
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Number of notifications
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are none
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn store() -> NotificationStore {
        NotificationStore::new(fixtures::notifications())
    }

    #[test]
    fn mark_read_sets_flag() {
        let mut store = store();
        assert_eq!(store.unread_count(), 2);
        assert!(store.mark_read(&NotificationId::from("1")).unwrap());
        assert!(store.get(&NotificationId::from("1")).unwrap().read);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn mark_read_already_read_is_unchanged() {
        let mut store = store();
        let before = store.items().to_vec();
        assert!(!store.mark_read(&NotificationId::from("3")).unwrap());
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn mark_read_unknown() {
        let mut store = store();
        let err = store.mark_read(&NotificationId::from("9")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn mark_all_read() {
        let mut store = store();
        assert_eq!(store.mark_all_read(), 2);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.mark_all_read(), 0);
    }

    #[test]
    fn dismiss_removes_then_is_idempotent() {
        let mut store = store();
        let removed = store.dismiss(&NotificationId::from("2")).unwrap();
        assert_eq!(removed.title, "Deadline Approaching");
        assert_eq!(store.len(), 2);

        let before = store.items().to_vec();
        assert!(store.dismiss(&NotificationId::from("2")).is_err());
        assert_eq!(store.items(), before.as_slice());
    }
}
