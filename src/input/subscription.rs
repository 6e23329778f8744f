use std::{cell::Cell, rc::Rc};

/// Registry for the window-level pointer listeners
///
/// The event loop asks [`PointerHub::is_listening`] before forwarding global
/// move/up events. Listeners are held through [`PointerSubscription`] guards,
/// so teardown releases them even in the middle of a drag.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    listeners: Rc<Cell<usize>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a global listener, released when the guard is dropped
    pub fn subscribe(&self) -> PointerSubscription {
        self.listeners.set(self.listeners.get() + 1);
        log::trace!("global pointer listener attached");
        PointerSubscription {
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Returns true while any subscription is alive
    pub fn is_listening(&self) -> bool {
        self.listeners.get() > 0
    }
}

/// Scoped global pointer listener
#[derive(Debug)]
pub struct PointerSubscription {
    listeners: Rc<Cell<usize>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get().saturating_sub(1));
        log::trace!("global pointer listener detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_released_on_drop() {
        let hub = PointerHub::new();
        assert!(!hub.is_listening());

        let guard = hub.subscribe();
        assert!(hub.is_listening());

        drop(guard);
        assert!(!hub.is_listening());
    }

    #[test]
    fn test_cloned_hub_shares_listeners() {
        let hub = PointerHub::new();
        let observer = hub.clone();

        let _guard = hub.subscribe();
        assert!(observer.is_listening());
    }
}
