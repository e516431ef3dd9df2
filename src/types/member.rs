use serde::Serialize;

/// Occupant of a multi-user chat room.
///
/// Owned by the protocol layer; this subsystem only reads the member name,
/// which keys the room's conference-description cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRoomMember {
    /// Nickname the member is known by inside the room.
    pub name: String,
    /// Protocol-level address, when the room discloses it.
    pub address: Option<String>,
}

impl ChatRoomMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Peer of a one-to-one chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub address: String,
    pub display_name: Option<String>,
}

impl Contact {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: None,
        }
    }
}
