//! Session, transport and protocol-provider seams.
//!
//! These traits mirror the contracts the surrounding client exposes to the
//! chat UI. The conference subsystem never owns their state; implementations
//! live with the protocol stack.

use crate::room::ChatRoom;
use crate::types::conference::ConferenceDescription;
use crate::types::member::{ChatRoomMember, Contact};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Capability families a protocol provider may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperationSet {
    /// Placing and receiving one-to-one calls.
    BasicTelephony,
    /// Multi-user chat rooms.
    MultiUserChat,
    /// Presence subscriptions.
    Presence,
}

/// Protocol context a chat transport operates over.
pub trait ProtocolProvider: Send + Sync {
    /// Name of the protocol, e.g. `"XMPP"`.
    fn protocol_name(&self) -> &str;

    /// Whether the provider implements `operation`.
    fn supports(&self, operation: OperationSet) -> bool;
}

/// Channel a chat session currently sends through.
pub trait ChatTransport: Send + Sync {
    fn display_name(&self) -> String;

    fn protocol_provider(&self) -> Arc<dyn ProtocolProvider>;
}

/// What a chat session is about: a multi-user room or a one-to-one contact.
///
/// Closed set; match exhaustively wherever the two kinds behave differently.
#[derive(Clone)]
pub enum SessionDescriptor {
    Room(Arc<dyn ChatRoom>),
    Contact(Contact),
}

impl fmt::Debug for SessionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(room) => f.debug_tuple("Room").field(&room.name()).finish(),
            Self::Contact(contact) => f.debug_tuple("Contact").field(&contact.address).finish(),
        }
    }
}

/// View-model for an active chat.
pub trait ChatSession: Send + Sync {
    /// What this session is a chat with.
    fn descriptor(&self) -> SessionDescriptor;

    /// Transport messages are currently sent through.
    fn current_chat_transport(&self) -> Arc<dyn ChatTransport>;

    /// Registers a conference announced by `member` in `room` with this
    /// session's conference list.
    fn add_chat_conference(
        &self,
        room: &Arc<dyn ChatRoom>,
        member: &ChatRoomMember,
        description: ConferenceDescription,
    );
}
