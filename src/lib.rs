pub mod conference;
pub mod resources;
pub mod room;
pub mod session;

pub mod types {
    pub mod conference;
    pub mod events;
    pub mod member;
}

// Flat re-exports of the types most integrations need.
pub use conference::{
    CallInitiationError, CallInitiator, ConferenceError, ConferenceListHandler,
    ConferenceListView, ConferenceRow, ConferenceStore, ConferenceUpdateHandler,
    ConferenceViewConfig, PointerButton, PointerClick, SubscriptionId,
};
pub use resources::{Color, ResourceProvider};
pub use room::{
    ChatRoom, ConferenceDescriptionCache, ConferencePublishedListener,
    ConferencePublishedListeners, ListenerId,
};
pub use session::{ChatSession, ChatTransport, OperationSet, ProtocolProvider, SessionDescriptor};
pub use types::conference::ConferenceDescription;
pub use types::events::{ConferenceListChange, ConferencePublishedEvent};
pub use types::member::{ChatRoomMember, Contact};
