// ============================================================================
// NOTIFICATION QUEUE - Append-only toasts with timed eviction
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{Notification, NotificationKind};

/// Queue of visible toasts. Pushing assigns an id; the caller (AppContext)
/// schedules an eviction timer per toast, so every message expires on its
/// own clock regardless of what else is pushed.
#[derive(Clone, Default)]
pub struct NotificationQueue {
    items: Rc<RefCell<Vec<Notification>>>,
    next_id: Rc<Cell<u32>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>, kind: NotificationKind) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.items.borrow_mut().push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove one toast by id. Returns false if it already expired.
    pub fn dismiss(&self, id: u32) -> bool {
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|n| n.id != id);
        items.len() != before
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appears_immediately() {
        let queue = NotificationQueue::new();
        let id = queue.push("Found 3 route(s)", NotificationKind::Success);
        let items = queue.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].kind, NotificationKind::Success);
    }

    #[test]
    fn dismiss_only_removes_its_own_toast() {
        let queue = NotificationQueue::new();
        let first = queue.push("one", NotificationKind::Info);
        let second = queue.push("two", NotificationKind::Error);

        assert!(queue.dismiss(first));
        let items = queue.snapshot();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second);

        // Expired ids are a no-op.
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn ids_are_unique_per_push() {
        let queue = NotificationQueue::new();
        let a = queue.push("a", NotificationKind::Warn);
        let b = queue.push("a", NotificationKind::Warn);
        assert_ne!(a, b);
    }
}
