use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use super::error::SubscriberError;
use super::globals::OwnableSquare;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
/// The value of a player field before or after a change.
pub enum FieldValue {
    Money(i64),
    Properties(Vec<OwnableSquare>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A change to one of a player's fields.
pub struct ChangeEvent {
    /// Name of the field that changed, e.g. `"money"`.
    pub field: String,
    pub old: FieldValue,
    pub new: FieldValue,
}

/// Identifies a subscriber within one player's registry.
pub type SubscriberId = String;

/// Anything that wants to hear about a player's changes: the UI, or a sync
/// endpoint forwarding events to remote peers.
pub trait Subscriber {
    /// Take one event. Delivery is fire-and-forget; an error is logged by the
    /// publisher and has no effect on the change itself.
    fn notify(&self, event: &ChangeEvent) -> Result<(), SubscriberError>;
}

impl<F> Subscriber for F
where
    F: Fn(&ChangeEvent) -> Result<(), SubscriberError>,
{
    fn notify(&self, event: &ChangeEvent) -> Result<(), SubscriberError> {
        self(event)
    }
}

/// An ordered registry of subscribers for one player.
#[derive(Default)]
pub struct Observable {
    subscribers: Vec<(SubscriberId, Box<dyn Subscriber>)>,
}

impl Observable {
    /// Return a registry with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber. Registering an id again swaps its endpoint in place,
    /// keeping its original delivery slot.
    pub fn register(&mut self, id: &str, endpoint: Box<dyn Subscriber>) {
        match self.subscribers.iter_mut().find(|(sid, _)| sid == id) {
            Some(slot) => slot.1 = endpoint,
            None => self.subscribers.push((id.to_owned(), endpoint)),
        }
    }

    /// Remove one subscriber. Return whether it was registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| sid != id);
        self.subscribers.len() != before
    }

    /// Drop every subscriber.
    pub fn unregister_all(&mut self) {
        self.subscribers.clear();
    }

    /// Return the number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Return whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `event` to every subscriber in registration order. A subscriber
    /// that errors or panics is skipped; the rest still receive the event.
    /// Return the number of subscribers that took the event.
    pub fn publish(&self, event: &ChangeEvent) -> usize {
        let mut delivered = 0;

        for (id, subscriber) in &self.subscribers {
            match catch_unwind(AssertUnwindSafe(|| subscriber.notify(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => {
                    log::warn!("subscriber {} failed on {:?} event: {}", id, event.field, err)
                }
                Err(_) => log::warn!("subscriber {} panicked on {:?} event", id, event.field),
            }
        }

        delivered
    }
}

impl std::fmt::Debug for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.subscribers.iter().map(|(id, _)| id))
            .finish()
    }
}
