//! Routes room announcements into a conference store.

use super::store::ConferenceStore;
use crate::room::ConferencePublishedListener;
use crate::types::events::ConferencePublishedEvent;
use log::{debug, warn};
use std::sync::Arc;

/// Applies published-conference events to a [`ConferenceStore`]: an
/// available description is added, a retracted one is removed.
///
/// Register it on a room's listener registry to keep the chat view's store
/// in step with announcements arriving from the network.
pub struct ConferenceUpdateHandler {
    store: Arc<ConferenceStore>,
}

impl ConferenceUpdateHandler {
    pub fn new(store: Arc<ConferenceStore>) -> Self {
        Self { store }
    }
}

impl ConferencePublishedListener for ConferenceUpdateHandler {
    fn conference_published(&self, event: &ConferencePublishedEvent) {
        let description = &event.description;
        if description.available {
            match self.store.add(description.clone()) {
                Ok(true) => debug!(
                    "conference {} announced by {} in {} added to the list",
                    description.uri,
                    event.member.name,
                    event.room.name()
                ),
                Ok(false) => debug!(
                    "ignoring duplicate announcement of conference {}",
                    description.uri
                ),
                Err(error) => warn!(
                    "dropping malformed conference announcement from {}: {}",
                    event.member.name, error
                ),
            }
        } else if self.store.remove(description) {
            debug!("conference {} retracted by {}", description.uri, event.member.name);
        }
    }
}
