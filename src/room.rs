//! Chat-room seam and conference-announcement plumbing.
//!
//! [`ChatRoom`] is implemented by the protocol layer. This module carries the
//! pieces every implementation shares: [`ConferencePublishedListeners`], the
//! registry that dispatches "a member published a conference description"
//! events, and [`ConferenceDescriptionCache`], the per-member-name store of
//! announcements received while no chat view was attached.

use crate::types::conference::ConferenceDescription;
use crate::types::events::ConferencePublishedEvent;
use crate::types::member::ChatRoomMember;
use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Listener for conference announcements made in a chat room.
pub trait ConferencePublishedListener: Send + Sync {
    fn conference_published(&self, event: &ConferencePublishedEvent);
}

/// Identifies a registered [`ConferencePublishedListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A multi-user messaging context that can cache announced conference
/// descriptions per member.
pub trait ChatRoom: Send + Sync {
    /// Identifier of the room, as shown in diagnostics.
    fn name(&self) -> String;

    /// Current occupants of the room.
    fn members(&self) -> Vec<ChatRoomMember>;

    /// Looks up the cached conference description announced by
    /// `member_name` without removing it.
    fn find_cached_conference_description(
        &self,
        member_name: &str,
    ) -> Option<ConferenceDescription>;

    /// Removes and returns the cached conference description announced by
    /// `member_name`.
    fn remove_cached_conference_description(
        &self,
        member_name: &str,
    ) -> Option<ConferenceDescription>;

    /// Registry dispatching published-conference events for this room.
    fn conference_published_listeners(&self) -> &ConferencePublishedListeners;

    fn add_conference_published_listener(
        &self,
        listener: Arc<dyn ConferencePublishedListener>,
    ) -> ListenerId {
        self.conference_published_listeners().add(listener)
    }

    fn remove_conference_published_listener(&self, id: ListenerId) {
        self.conference_published_listeners().remove(id)
    }
}

/// Insertion-ordered registry of [`ConferencePublishedListener`]s.
///
/// Registration order is dispatch order. [`fire`](Self::fire) copies the
/// listener list under the lock and dispatches after releasing it, so a
/// callback may register or unregister listeners (including itself) without
/// deadlocking or corrupting the running dispatch.
#[derive(Default)]
pub struct ConferencePublishedListeners {
    listeners: Mutex<Vec<(ListenerId, Arc<dyn ConferencePublishedListener>)>>,
    next_id: AtomicU64,
}

impl ConferencePublishedListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns the id that unregisters it.
    /// Listeners are not deduplicated; registering one twice means it is
    /// invoked twice per event.
    pub fn add(&self, listener: Arc<dyn ConferencePublishedListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .expect("mutex should not be poisoned")
            .push((id, listener));
        id
    }

    /// Unregisters a listener. Unknown ids are ignored.
    pub fn remove(&self, id: ListenerId) {
        self.listeners
            .lock()
            .expect("mutex should not be poisoned")
            .retain(|(listener_id, _)| *listener_id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.listeners
            .lock()
            .expect("mutex should not be poisoned")
            .is_empty()
    }

    /// Notifies every registered listener that `member` published
    /// `description` in `room`, synchronously and in registration order on
    /// the calling thread.
    pub fn fire(
        &self,
        room: Arc<dyn ChatRoom>,
        member: ChatRoomMember,
        description: ConferenceDescription,
    ) {
        let snapshot: Vec<Arc<dyn ConferencePublishedListener>> = self
            .listeners
            .lock()
            .expect("mutex should not be poisoned")
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        if snapshot.is_empty() {
            return;
        }

        debug!(
            "conference {} published by {} in {}, notifying {} listener(s)",
            description.uri,
            member.name,
            room.name(),
            snapshot.len()
        );

        let event = ConferencePublishedEvent {
            room,
            member,
            description,
            fired_at: Utc::now(),
        };
        for listener in snapshot {
            listener.conference_published(&event);
        }
    }
}

/// Per-member-name cache of announced conference descriptions.
///
/// Rooms keep the latest announcement of each member here while no chat view
/// is attached; the view's initialization pass drains it. One description per
/// member name, last write wins.
#[derive(Debug, Default)]
pub struct ConferenceDescriptionCache {
    entries: DashMap<String, ConferenceDescription>,
}

impl ConferenceDescriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches `description` under `member_name`, returning the announcement
    /// it replaced.
    pub fn insert(
        &self,
        member_name: impl Into<String>,
        description: ConferenceDescription,
    ) -> Option<ConferenceDescription> {
        self.entries.insert(member_name.into(), description)
    }

    pub fn find(&self, member_name: &str) -> Option<ConferenceDescription> {
        self.entries
            .get(member_name)
            .map(|entry| entry.value().clone())
    }

    pub fn remove(&self, member_name: &str) -> Option<ConferenceDescription> {
        self.entries.remove(member_name).map(|(_, description)| description)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
