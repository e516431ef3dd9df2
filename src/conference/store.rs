//! Observable store of announced conference descriptions.

use super::error::ConferenceError;
use crate::session::{ChatSession, SessionDescriptor};
use crate::types::conference::ConferenceDescription;
use crate::types::events::ConferenceListChange;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Receives [`ConferenceListChange`] events from a [`ConferenceStore`].
pub trait ConferenceListHandler: Send + Sync {
    fn handle_change(&self, change: &ConferenceListChange);
}

/// Identifies a store subscription, for [`ConferenceStore::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Insertion-ordered, duplicate-free store of the conference descriptions
/// announced in a chat.
///
/// All reads and mutations are serialized by one mutex. Change events are
/// built while the mutex is held and dispatched after it is released, so a
/// subscriber may call back into the store from its handler. Events reach
/// subscribers in mutation order for mutations racing on the store mutex;
/// no atomicity is promised across a sequence of calls.
#[derive(Default)]
pub struct ConferenceStore {
    descriptions: Mutex<Vec<ConferenceDescription>>,
    subscribers: Mutex<Vec<(SubscriptionId, Arc<dyn ConferenceListHandler>)>>,
    next_subscription: AtomicU64,
}

impl ConferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the conference descriptions already cached on the session's
    /// chat room and registers them with the session.
    ///
    /// Run once when the chat view opens, so announcements made before the
    /// view existed still surface. No-op for one-to-one sessions.
    pub fn init_conferences(&self, session: &Arc<dyn ChatSession>) {
        match session.descriptor() {
            SessionDescriptor::Room(room) => {
                for member in room.members() {
                    if let Some(description) =
                        room.remove_cached_conference_description(&member.name)
                    {
                        debug!(
                            "draining cached conference {} announced by {}",
                            description.uri, member.name
                        );
                        session.add_chat_conference(&room, &member, description);
                    }
                }
            }
            SessionDescriptor::Contact(_) => {}
        }
    }

    /// Appends `description` unless an equal entry is already present.
    ///
    /// Returns `true` when the entry was inserted and an added event was
    /// emitted; inserting an equal duplicate is a no-op that emits nothing.
    /// A description without a call URI is rejected before any mutation.
    pub fn add(&self, description: ConferenceDescription) -> Result<bool, ConferenceError> {
        if !description.has_identity() {
            return Err(ConferenceError::InvalidDescription);
        }

        let change = {
            let mut descriptions = self
                .descriptions
                .lock()
                .expect("mutex should not be poisoned");
            if descriptions.contains(&description) {
                return Ok(false);
            }
            let index = descriptions.len();
            descriptions.push(description.clone());
            ConferenceListChange::Added { index, description }
        };

        self.notify(&change);
        Ok(true)
    }

    /// Removes the entry equal to `description`, if present.
    ///
    /// Returns `true` when an entry was removed and a removed event carrying
    /// its prior index was emitted; removing an absent entry is a no-op.
    pub fn remove(&self, description: &ConferenceDescription) -> bool {
        let change = {
            let mut descriptions = self
                .descriptions
                .lock()
                .expect("mutex should not be poisoned");
            let Some(index) = descriptions.iter().position(|entry| entry == description) else {
                return false;
            };
            let removed = descriptions.remove(index);
            ConferenceListChange::Removed {
                index,
                description: removed,
            }
        };

        self.notify(&change);
        true
    }

    /// Description at `index` in insertion order.
    pub fn get(&self, index: usize) -> Result<ConferenceDescription, ConferenceError> {
        let descriptions = self
            .descriptions
            .lock()
            .expect("mutex should not be poisoned");
        let len = descriptions.len();
        descriptions
            .get(index)
            .cloned()
            .ok_or(ConferenceError::IndexOutOfBounds { index, len })
    }

    pub fn len(&self) -> usize {
        self.descriptions
            .lock()
            .expect("mutex should not be poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the current entries, in insertion order.
    pub fn descriptions(&self) -> Vec<ConferenceDescription> {
        self.descriptions
            .lock()
            .expect("mutex should not be poisoned")
            .clone()
    }

    /// Registers `handler` for subsequent change events.
    pub fn subscribe(&self, handler: Arc<dyn ConferenceListHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .expect("mutex should not be poisoned")
            .push((id, handler));
        id
    }

    /// Drops a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .lock()
            .expect("mutex should not be poisoned")
            .retain(|(subscription_id, _)| *subscription_id != id);
    }

    fn notify(&self, change: &ConferenceListChange) {
        let snapshot: Vec<Arc<dyn ConferenceListHandler>> = self
            .subscribers
            .lock()
            .expect("mutex should not be poisoned")
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in snapshot {
            handler.handle_change(change);
        }
    }
}
