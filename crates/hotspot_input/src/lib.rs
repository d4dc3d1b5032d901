//! hotspot_input - input plumbing for the hotspot editor
//!
//! Pointer and keyboard event types, the geometry primitives those events carry,
//! and the small single-threaded primitives the editor builds its state machines on:
//! optional callbacks, scoped global-input subscriptions and an end-of-cycle task queue.

mod bus;
mod callback;
mod deferred;
mod event;
mod geometry;

pub use bus::{EventFilter, InputBus, Subscription};
pub use callback::Callback;
pub use deferred::DeferredQueue;
pub use event::{Event, EventCategory, Key, Modifiers, MouseButton};
pub use geometry::{Point, Rectangle, Size};
