//! Debounce bookkeeping independent of any timer implementation.
//!
//! # Design
//! - The debouncer owns the pending timer handle; arming a new one drops (and so
//!   cancels) the previous handle.
//! - Every arm gets a generation; only the newest generation may fire.
//! - A fired handle is kept until the next arm so a timer callback never drops its own
//!   closure while running.

/// Pending-call slot keyed by generation.
#[derive(Debug)]
pub struct Debouncer<H> {
    generation: u64,
    armed: Option<u64>,
    handle: Option<H>,
}

impl<H> Default for Debouncer<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            armed: None,
            handle: None,
        }
    }
}

impl<H> Debouncer<H> {
    /// Replace any pending call with a new one built by `arm`.
    ///
    /// `arm` receives the generation that must later be passed to [`Self::fire`].
    pub fn schedule<F>(&mut self, arm: F) -> u64
    where
        F: FnOnce(u64) -> H,
    {
        self.handle.take();
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.handle = Some(arm(generation));
        self.armed = Some(generation);
        generation
    }

    /// Claim the call for `generation`; `false` when it was superseded or cancelled.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed == Some(generation) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel(&mut self) {
        self.armed = None;
        self.handle.take();
    }

    /// Whether a call is armed and not yet fired.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.armed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn rapid_keystrokes_fire_only_the_last_term() {
        let mut debouncer: Debouncer<String> = Debouncer::default();
        let fired = RefCell::new(Vec::new());
        let mut tickets = Vec::new();
        for term in ["a", "ap", "app"] {
            let generation = debouncer.schedule(|_| term.to_string());
            tickets.push((generation, term));
        }
        for (generation, term) in tickets {
            if debouncer.fire(generation) {
                fired.borrow_mut().push(term);
            }
        }
        assert_eq!(*fired.borrow(), vec!["app"]);
    }

    #[test]
    fn rearming_drops_the_previous_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut debouncer = Debouncer::default();
        debouncer.schedule(|_| DropCounter(drops.clone()));
        assert_eq!(drops.get(), 0);
        debouncer.schedule(|_| DropCounter(drops.clone()));
        assert_eq!(drops.get(), 1);
        debouncer.cancel();
        assert_eq!(drops.get(), 2);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn fired_generation_cannot_fire_twice() {
        let mut debouncer = Debouncer::default();
        let generation = debouncer.schedule(|generation| generation);
        assert!(debouncer.is_pending());
        assert!(debouncer.fire(generation));
        assert!(!debouncer.fire(generation));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn firing_keeps_handle_until_next_arm() {
        let drops = Rc::new(Cell::new(0));
        let mut debouncer = Debouncer::default();
        let generation = debouncer.schedule(|_| DropCounter(drops.clone()));
        assert!(debouncer.fire(generation));
        assert_eq!(drops.get(), 0);
        debouncer.schedule(|_| DropCounter(drops.clone()));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn cancelled_call_does_not_fire() {
        let mut debouncer = Debouncer::default();
        let generation = debouncer.schedule(|_| ());
        debouncer.cancel();
        assert!(!debouncer.fire(generation));
    }
}
