//! Re-render requests from component state to the render driver.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use tracing::debug;

type Subscriber = Box<dyn Fn(&'static str)>;

/// Shared channel between component state and whoever drives rendering.
///
/// `notify` marks a render as pending and calls every subscriber with the name
/// of the component whose state changed. The driver clears the pending flag
/// when it starts a pass. Subscribers must not subscribe from inside a
/// notification.
#[derive(Clone, Default)]
pub struct UpdateSignal {
    inner: Rc<SignalInner>,
}

#[derive(Default)]
struct SignalInner {
    pending: Cell<bool>,
    notifications: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl UpdateSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self, source: &'static str) {
        self.inner.pending.set(true);
        self.inner
            .notifications
            .set(self.inner.notifications.get() + 1);
        debug!(source, "Re-render requested");
        for subscriber in self.inner.subscribers.borrow().iter() {
            subscriber(source);
        }
    }

    pub fn subscribe(&self, subscriber: impl Fn(&'static str) + 'static) {
        self.inner
            .subscribers
            .borrow_mut()
            .push(Box::new(subscriber));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Clear the pending flag, returning whether it was set.
    pub fn take_pending(&self) -> bool {
        self.inner.pending.replace(false)
    }

    /// Total notifications since creation.
    #[must_use]
    pub fn notifications(&self) -> u64 {
        self.inner.notifications.get()
    }
}

impl fmt::Debug for UpdateSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateSignal")
            .field("pending", &self.inner.pending.get())
            .field("notifications", &self.inner.notifications.get())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}
