//! Listener bookkeeping for a single picker.
//!
//! Hosts do not call picker closures directly. They dispatch events into the
//! picker, which looks up the listeners registered for each node on the
//! bubble path. Removing a listener is therefore just dropping its entry,
//! and a drag session can always find and remove exactly what it added.

use crate::layout::Target;
use crate::pointer::EventName;

/// Handle of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// What a listener does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Start a saturation/value drag
    PalettePress,
    /// Jump the hue to the press point and start a hue drag
    TrackPress,
    /// Start a hue drag from the current hue
    KnobPress,
    /// Update the active drag session
    DragMove,
    /// End the active drag session
    DragRelease,
}

/// Whether an event keeps bubbling after a node handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    target: Target,
    event: EventName,
    handler: Handler,
}

/// Registered listeners, in registration order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: Target, event: EventName, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            target,
            event,
            handler,
        });
        log::trace!("listener {:?}: {:?} on {:?} -> {:?}", id, event, target, handler);
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Remove every listener, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.listeners.len();
        self.listeners.clear();
        count
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|listener| listener.id == id)
    }

    /// Listeners for an event on one node, snapshotted so handlers may
    /// add or remove listeners while the caller iterates.
    pub fn matching(&self, target: Target, event: EventName) -> Vec<(ListenerId, Handler)> {
        self.listeners
            .iter()
            .filter(|listener| listener.target == target && listener.event == event)
            .map(|listener| (listener.id, listener.handler))
            .collect()
    }

    /// Number of listeners attached to a node.
    pub fn count_on(&self, target: Target) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.target == target)
            .count()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_filters_by_target_and_event() {
        let mut registry = ListenerRegistry::new();
        let press = registry.add(Target::Palette, EventName::MouseDown, Handler::PalettePress);
        registry.add(Target::Palette, EventName::TouchStart, Handler::PalettePress);
        registry.add(Target::Document, EventName::MouseMove, Handler::DragMove);

        let found = registry.matching(Target::Palette, EventName::MouseDown);
        assert_eq!(found, vec![(press, Handler::PalettePress)]);
        assert!(registry.matching(Target::Document, EventName::MouseDown).is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        let id = registry.add(Target::Document, EventName::MouseUp, Handler::DragRelease);
        assert!(registry.contains(id));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut registry = ListenerRegistry::new();
        let first = registry.add(Target::Document, EventName::MouseUp, Handler::DragRelease);
        registry.remove(first);
        let second = registry.add(Target::Document, EventName::MouseUp, Handler::DragRelease);
        assert_ne!(first, second);
    }

    #[test]
    fn test_clear_and_count() {
        let mut registry = ListenerRegistry::new();
        registry.add(Target::SliderTrack, EventName::MouseDown, Handler::TrackPress);
        registry.add(Target::SliderKnob, EventName::MouseDown, Handler::KnobPress);
        registry.add(Target::SliderKnob, EventName::MouseUp, Handler::DragRelease);
        assert_eq!(registry.count_on(Target::SliderKnob), 2);
        assert_eq!(registry.clear(), 3);
        assert_eq!(registry.len(), 0);
    }
}
