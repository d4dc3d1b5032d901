//! Global input subscriptions.
//!
//! Some listeners need to observe input that never reaches their own surface:
//! a selected region deselects on a click anywhere else and deletes itself on a key
//! release. Instead of ambient window listeners, an owner subscribes to an
//! [`InputBus`] and keeps the returned [`Subscription`] guard alive for as long as it
//! wants to observe. Dropping the guard unregisters it, on every exit path.
//!
//! Everything here is single-threaded: the bus is shared with `Rc`, not `Arc`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::{Event, EventCategory};

/// Subscription handle identifying one registration on a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Filter to receive only specific event categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter.
    pub fn matches<T>(&self, event: &Event<T>) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

struct Registry<K> {
    next_id: u64,
    /// Ordered by id, so delivery follows subscription order.
    entries: BTreeMap<SubscriptionId, (EventFilter, K)>,
}

/// Registry of owners interested in global input.
///
/// The bus does not call back into owners. [`InputBus::subscribers`] returns the
/// owner keys whose filter matches an event and the caller routes the event to them,
/// which keeps all mutable state in the caller's hands.
pub struct InputBus<K> {
    registry: Rc<RefCell<Registry<K>>>,
}

impl<K: Clone + fmt::Debug> InputBus<K> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 1,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Register `owner` for events matching `filter`.
    ///
    /// The registration lives exactly as long as the returned guard.
    #[must_use = "dropping the subscription unregisters it immediately"]
    pub fn subscribe(&self, filter: EventFilter, owner: K) -> Subscription<K> {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        log::debug!("{} added for {:?}", id, owner);
        registry.entries.insert(id, (filter, owner));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Owners whose filter matches `event`, in subscription order.
    pub fn subscribers<T>(&self, event: &Event<T>) -> Vec<K> {
        self.registry
            .borrow()
            .entries
            .values()
            .filter(|(filter, _)| filter.matches(event))
            .map(|(_, owner)| owner.clone())
            .collect()
    }

    /// Get the number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

impl<K: Clone + fmt::Debug> Default for InputBus<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for InputBus<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBus")
            .field("subscribers", &self.registry.borrow().entries.len())
            .finish()
    }
}

/// Scoped registration on an [`InputBus`]. Unregisters on drop.
pub struct Subscription<K> {
    id: SubscriptionId,
    registry: Weak<RefCell<Registry<K>>>,
}

impl<K> Drop for Subscription<K> {
    fn drop(&mut self) {
        // The bus may already be gone; then there is nothing to release.
        let removed = self
            .registry
            .upgrade()
            .is_some_and(|registry| registry.borrow_mut().entries.remove(&self.id).is_some());
        if removed {
            log::debug!("{} removed", self.id);
        }
    }
}

impl<K> fmt::Debug for Subscription<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, Modifiers, MouseButton};
    use crate::Point;

    fn click() -> Event<()> {
        Event::Click {
            button: MouseButton::Left,
            position: Point::zero(),
            target: (),
        }
    }

    fn key_up() -> Event<()> {
        Event::KeyReleased {
            key: Key::Delete,
            modifiers: Modifiers::none(),
        }
    }

    #[test]
    fn test_subscribe_and_drop_releases() {
        let bus: InputBus<&str> = InputBus::new();
        let sub = bus.subscribe(EventFilter::All, "a");
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(bus.subscribers(&click()), vec!["a"]);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
        assert!(bus.subscribers(&click()).is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let bus: InputBus<&str> = InputBus::new();
        let _pointer = bus.subscribe(EventFilter::Categories(vec![EventCategory::Pointer]), "p");
        let _keys = bus.subscribe(EventFilter::Categories(vec![EventCategory::Keyboard]), "k");
        let _all = bus.subscribe(EventFilter::All, "all");

        assert_eq!(bus.subscribers(&click()), vec!["p", "all"]);
        assert_eq!(bus.subscribers(&key_up()), vec!["k", "all"]);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus: InputBus<u32> = InputBus::new();
        let sub = bus.subscribe(EventFilter::All, 7);
        drop(bus);
        // Dropping after the bus is gone must not panic.
        drop(sub);
    }

    #[test]
    fn test_delivery_follows_subscription_order() {
        let bus: InputBus<u32> = InputBus::new();
        let first = bus.subscribe(EventFilter::All, 1);
        let _second = bus.subscribe(EventFilter::All, 2);
        drop(first);
        let _third = bus.subscribe(EventFilter::All, 3);
        assert_eq!(bus.subscribers(&click()), vec![2, 3]);
    }
}
