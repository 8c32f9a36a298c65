//! Bounded queue of one-shot notifications.
//!
//! The queue only stores toasts; auto-dismissal timers live with the
//! [`Toaster`](crate::Toaster) component that renders them.

use crate::{Notification, MAX_VISIBLE_TOASTS};

/// Identifier of a queued toast, unique within one queue.
pub type ToastId = u64;

/// A notification waiting on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastQueue {
    /// Queues a notification, evicting the oldest past [`MAX_VISIBLE_TOASTS`].
    pub fn push(&mut self, notification: Notification) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Removes a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
