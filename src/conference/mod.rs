//! Conference-announcement list for a chat view.
//!
//! Chat room members can announce conferences the rest of the room may join.
//! This module keeps those announcements in an observable list and binds it
//! to a presentation layer.
//!
//! # Architecture
//!
//! - [`ConferenceStore`]: ordered, duplicate-free store of announced
//!   descriptions, emitting added/removed-at-index change events
//! - [`ConferenceListView`]: toolkit-agnostic row adapter over the store,
//!   with selection, type-ahead search and double-click-to-join
//! - [`ConferenceUpdateHandler`]: routes a room's published-conference
//!   events into a store (add on announce, remove on retract)
//! - [`CallInitiator`]: seam to the call engine that actually joins a
//!   conference

mod error;
mod handler;
mod store;
mod view;


pub use error::{CallInitiationError, ConferenceError};
pub use handler::ConferenceUpdateHandler;
pub use store::{ConferenceListHandler, ConferenceStore, SubscriptionId};
pub use view::{
    CallInitiator, ConferenceListView, ConferenceRow, ConferenceViewConfig, PointerButton,
    PointerClick,
};
