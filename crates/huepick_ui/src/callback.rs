//! Change observers.
//!
//! Observers are plain closures kept in insertion order. Registering the
//! same closure twice notifies it twice; there is no deduplication.
//!
//! # Examples
//!
//! ```
//! use huepick_ui::ObserverList;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut observers: ObserverList<u32> = ObserverList::new();
//!
//! let sink = Rc::clone(&seen);
//! let id = observers.subscribe(move |value| sink.set(value));
//! observers.notify(7);
//! assert_eq!(seen.get(), 7);
//!
//! observers.unsubscribe(id);
//! observers.notify(9);
//! assert_eq!(seen.get(), 7);
//! ```

use std::fmt;

/// Handle returned by [`ObserverList::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered list of change callbacks.
pub struct ObserverList<T> {
    observers: Vec<(SubscriptionId, Box<dyn FnMut(T)>)>,
    next_id: u64,
}

impl<T: Copy> ObserverList<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. Notification order follows registration order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(T) + 'static,
    {
        self.subscribe_boxed(Box::new(observer))
    }

    /// Register an already boxed observer.
    pub fn subscribe_boxed(&mut self, observer: Box<dyn FnMut(T)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Call every observer with `value`.
    pub fn notify(&mut self, value: T) {
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T: Copy> Default for ObserverList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObserverList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.observers.len())
            .finish()
    }
}
