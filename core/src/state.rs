//! Component-local state shared with button handlers.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::UpdateSignal;

/// Component-local state.
///
/// Clones share the same value, which is how button handlers reach the state
/// of the component that rendered them. A state only requests re-renders once
/// it has been attached to a signal at mount.
pub struct State<T> {
    value: Rc<RefCell<T>>,
    signal: Option<UpdateSignal>,
    owner: &'static str,
}

impl<T> State<T> {
    /// Detached state owned by `owner`.
    #[must_use]
    pub fn new(owner: &'static str, value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            signal: None,
            owner,
        }
    }

    pub fn attach(&mut self, signal: &UpdateSignal) {
        self.signal = Some(signal.clone());
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.signal.is_some()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.value.borrow())
    }
}

impl<T: Copy> State<T> {
    #[must_use]
    pub fn get(&self) -> T {
        *self.value.borrow()
    }
}

impl<T: PartialEq> State<T> {
    /// Store `value`, requesting a re-render if it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        let changed = {
            let mut current = self.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed && let Some(signal) = &self.signal {
            signal.notify(self.owner);
        }
        changed
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            signal: self.signal.clone(),
            owner: self.owner,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("owner", &self.owner)
            .field("value", &*self.value.borrow())
            .field("attached", &self.signal.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::State;
    use crate::UpdateSignal;

    #[test]
    fn detached_state_never_notifies() {
        let state = State::new("Test", 1_u8);
        assert!(!state.is_attached());
        assert!(state.set(2));
        assert_eq!(state.get(), 2);
    }

    #[test]
    fn set_notifies_only_on_change() {
        let signal = UpdateSignal::new();
        let mut state = State::new("Test", false);
        state.attach(&signal);

        assert!(!state.set(false));
        assert_eq!(signal.notifications(), 0);

        assert!(state.set(true));
        assert!(!state.set(true));
        assert_eq!(signal.notifications(), 1);
        assert!(signal.is_pending());
    }

    #[test]
    fn clones_share_value_and_signal() {
        let signal = UpdateSignal::new();
        let mut state = State::new("Test", 0_u32);
        state.attach(&signal);

        let handle = state.clone();
        handle.set(7);

        assert_eq!(state.get(), 7);
        assert_eq!(state.with(|v| v * 2), 14);
        assert_eq!(signal.notifications(), 1);
    }
}
