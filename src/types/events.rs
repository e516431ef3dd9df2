use crate::room::ChatRoom;
use crate::types::conference::ConferenceDescription;
use crate::types::member::ChatRoomMember;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Notifies listeners that a chat room member published a conference
/// description.
#[derive(Clone, Serialize)]
pub struct ConferencePublishedEvent {
    /// Room the announcement was made in.
    #[serde(skip)]
    pub room: Arc<dyn ChatRoom>,
    /// Member who published the description.
    pub member: ChatRoomMember,
    /// The published description.
    pub description: ConferenceDescription,
    /// When the event was fired.
    pub fired_at: DateTime<Utc>,
}

impl fmt::Debug for ConferencePublishedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConferencePublishedEvent")
            .field("room", &self.room.name())
            .field("member", &self.member)
            .field("description", &self.description)
            .field("fired_at", &self.fired_at)
            .finish()
    }
}

/// Structured change emitted by the conference store to its subscribers.
///
/// Indices refer to the store's insertion-ordered sequence at the moment the
/// mutation was applied, so any row-oriented presentation can mirror the
/// store without rescanning it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ConferenceListChange {
    /// A description was inserted at `index`.
    Added {
        index: usize,
        description: ConferenceDescription,
    },
    /// The description previously at `index` was removed.
    Removed {
        index: usize,
        description: ConferenceDescription,
    },
}

impl ConferenceListChange {
    pub fn description(&self) -> &ConferenceDescription {
        match self {
            Self::Added { description, .. } | Self::Removed { description, .. } => description,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Added { index, .. } | Self::Removed { index, .. } => *index,
        }
    }
}
