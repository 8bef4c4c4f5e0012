//! Observer registry for UI change notifications
//!
//! Front-end elements are rebuilt often (a color table is regenerated whenever
//! the category type changes), so every registration hands back a
//! [`SubscriptionId`] that can be used to remove it again. Dropping all
//! subscriptions at once is done with [`Observers::clear`].
//!
//! # Examples
//!
//! ```
//! use genome_view_ui::Observers;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let hits = Rc::new(Cell::new(0));
//! let mut observers = Observers::<u32>::new();
//!
//! let counter = Rc::clone(&hits);
//! let id = observers.subscribe(move |value| counter.set(counter.get() + *value));
//!
//! observers.notify(&2);
//! observers.unsubscribe(id);
//! observers.notify(&5);
//!
//! assert_eq!(hits.get(), 2);
//! ```

use std::fmt;

/// Handle identifying one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A list of observers notified with a shared reference to an event value.
///
/// Observers are called in registration order. The registry is single-threaded:
/// the stored closures are neither `Send` nor `Sync`.
pub struct Observers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Fn(&T)>)>,
}

impl<T> Observers<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register an observer and return its handle.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(f)));
        log::trace!("observer {} subscribed ({} active)", id.0, self.entries.len());
        id
    }

    /// Remove an observer. Returns `false` if the handle was not registered
    /// (already removed, or cleared by a rebuild).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        if !removed {
            log::debug!("observer {} was not registered", id.0);
        }
        removed
    }

    /// Call every registered observer with `value`.
    /// Returns the number of observers that were called.
    pub fn notify(&self, value: &T) -> usize {
        for (_, f) in &self.entries {
            f(value);
        }
        self.entries.len()
    }

    /// Remove all observers.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::trace!("dropping {} observers", self.entries.len());
        }
        self.entries.clear();
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a handle is still registered.
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("active", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::<&'static str>::new();

        let first = Rc::clone(&log);
        observers.subscribe(move |v| first.borrow_mut().push(format!("a:{v}")));
        let second = Rc::clone(&log);
        observers.subscribe(move |v| second.borrow_mut().push(format!("b:{v}")));

        assert_eq!(observers.notify(&"x"), 2);
        assert_eq!(*log.borrow(), vec!["a:x".to_string(), "b:x".to_string()]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let calls = Rc::new(RefCell::new(0));
        let mut observers = Observers::<()>::new();

        let counter = Rc::clone(&calls);
        let id = observers.subscribe(move |_| *counter.borrow_mut() += 1);
        observers.notify(&());

        assert!(observers.unsubscribe(id));
        assert!(!observers.contains(id));
        observers.notify(&());

        assert_eq!(*calls.borrow(), 1);
        assert!(!observers.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut observers = Observers::<()>::new();
        let a = observers.subscribe(|_| {});
        observers.clear();
        assert!(observers.is_empty());

        let b = observers.subscribe(|_| {});
        assert_ne!(a, b);
        assert!(!observers.unsubscribe(a));
        assert_eq!(observers.len(), 1);
    }
}
