use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Metadata announcing an ongoing, joinable multi-party call.
///
/// Published by a chat room member and shown in the chat view until the
/// publisher retracts it. Two descriptions denote the same conference when
/// their identity fields (`uri`, `call_id`, `password`) match; availability,
/// display name and transports may differ between announcements of the same
/// conference.
#[derive(Debug, Clone, Serialize)]
pub struct ConferenceDescription {
    /// URI used to join the conference.
    pub uri: String,
    /// Protocol-level call id, when the publisher assigned one.
    pub call_id: Option<String>,
    /// Password required to join, when the conference is protected.
    pub password: Option<String>,
    /// Whether the conference is joinable. A published description with
    /// `available == false` retracts an earlier announcement.
    pub available: bool,
    /// Human-readable name shown in the conference list.
    pub display_name: Option<String>,
    /// Transports the publisher can negotiate for this conference.
    pub transports: BTreeSet<String>,
    /// When the announcement was received.
    pub announced_at: DateTime<Utc>,
}

impl ConferenceDescription {
    /// Creates an available conference announcement for `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            call_id: None,
            password: None,
            available: true,
            display_name: None,
            transports: BTreeSet::new(),
            announced_at: Utc::now(),
        }
    }

    /// Creates a retraction of an earlier announcement of `uri`.
    pub fn retracted(uri: impl Into<String>) -> Self {
        Self {
            available: false,
            ..Self::new(uri)
        }
    }

    pub fn with_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_id = Some(call_id.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transports.insert(transport.into());
        self
    }

    /// Whether the description identifies a conference at all. Descriptions
    /// without a call URI cannot be joined, deduplicated or retracted.
    pub fn has_identity(&self) -> bool {
        !self.uri.is_empty()
    }

    /// Name shown to the user; falls back to the URI for unnamed
    /// conferences.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.uri)
    }
}

impl PartialEq for ConferenceDescription {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
            && self.call_id == other.call_id
            && self.password == other.password
    }
}

impl Eq for ConferenceDescription {}
