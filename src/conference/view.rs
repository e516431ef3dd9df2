//! Presentation adapter binding a [`ConferenceStore`] to a row list.
//!
//! The view is toolkit-agnostic: it keeps a label-per-row model any list
//! widget can render, and the hosting widget forwards resolved pointer
//! clicks and typed characters to it.

use super::error::{CallInitiationError, ConferenceError};
use super::store::{ConferenceListHandler, ConferenceStore, SubscriptionId};
use crate::resources::{Color, ResourceProvider};
use crate::session::{ChatSession, OperationSet, ProtocolProvider};
use crate::types::conference::ConferenceDescription;
use crate::types::events::ConferenceListChange;
use async_trait::async_trait;
use log::debug;
use std::sync::{Arc, Mutex};

/// Initiates a call to an announced conference.
///
/// Implemented by the call engine; the view invokes it with the session's
/// protocol context when the user double-clicks a row.
#[async_trait]
pub trait CallInitiator: Send + Sync {
    async fn call(
        &self,
        provider: Arc<dyn ProtocolProvider>,
        description: ConferenceDescription,
    ) -> Result<(), CallInitiationError>;
}

/// Resource keys the view resolves through its [`ResourceProvider`].
#[derive(Debug, Clone)]
pub struct ConferenceViewConfig {
    /// i18n key of the suffix appended to every row label.
    pub item_label_suffix_key: String,
    /// Theme key of the list foreground color.
    pub foreground_color_key: String,
}

impl Default for ConferenceViewConfig {
    fn default() -> Self {
        Self {
            item_label_suffix_key: "chat.conference.item_label_suffix".into(),
            foreground_color_key: "chat.conference.list_foreground".into(),
        }
    }
}

/// Pointer button in a click forwarded to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A click the hosting widget has already resolved to a list row.
#[derive(Debug, Clone, Copy)]
pub struct PointerClick {
    pub button: PointerButton,
    pub click_count: u8,
    pub row: usize,
}

impl PointerClick {
    /// Primary-button double-click on `row`, the join gesture.
    pub fn double(row: usize) -> Self {
        Self {
            button: PointerButton::Primary,
            click_count: 2,
            row,
        }
    }
}

/// Display state of one conference list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceRow {
    pub label: String,
}

struct ListState {
    rows: Vec<ConferenceRow>,
    selected: Option<usize>,
}

/// Shared with the store subscription so changes arriving on other threads
/// update the same rows the UI reads.
struct ViewState {
    list: Mutex<ListState>,
    foreground: Mutex<Option<Color>>,
    resources: Arc<dyn ResourceProvider>,
    config: ConferenceViewConfig,
}

impl ViewState {
    fn label_for(&self, description: &ConferenceDescription) -> String {
        format!(
            "{}{}",
            description.label(),
            self.resources.i18n_string(&self.config.item_label_suffix_key)
        )
    }

    fn apply(&self, change: &ConferenceListChange) {
        let mut list = self.list.lock().expect("mutex should not be poisoned");
        match change {
            ConferenceListChange::Added { index, description } => {
                let row = ConferenceRow {
                    label: self.label_for(description),
                };
                let index = (*index).min(list.rows.len());
                list.rows.insert(index, row);
                if let Some(selected) = list.selected {
                    if index <= selected {
                        list.selected = Some(selected + 1);
                    }
                }
            }
            ConferenceListChange::Removed { index, .. } => {
                if *index < list.rows.len() {
                    list.rows.remove(*index);
                }
                match list.selected {
                    Some(selected) if selected == *index => list.selected = None,
                    Some(selected) if selected > *index => list.selected = Some(selected - 1),
                    _ => {}
                }
            }
        }
    }

    fn reload_foreground(&self) {
        // A theme without the key keeps the previously resolved color.
        if let Some(color) = self.resources.color(&self.config.foreground_color_key) {
            *self.foreground.lock().expect("mutex should not be poisoned") = Some(color);
        }
    }
}

impl ConferenceListHandler for ViewState {
    fn handle_change(&self, change: &ConferenceListChange) {
        self.apply(change);
    }
}

/// Row-list adapter over a [`ConferenceStore`] for one chat session.
///
/// Mirrors the store into labeled rows, tracks a single selection, offers
/// type-ahead search, and turns a primary-button double-click into a call
/// through the injected [`CallInitiator`], provided the session's protocol
/// provider supports multi-user chat.
pub struct ConferenceListView {
    session: Arc<dyn ChatSession>,
    store: Arc<ConferenceStore>,
    state: Arc<ViewState>,
    subscription: SubscriptionId,
    initiator: Arc<dyn CallInitiator>,
    click_to_join: bool,
}

impl ConferenceListView {
    pub fn new(
        session: Arc<dyn ChatSession>,
        store: Arc<ConferenceStore>,
        resources: Arc<dyn ResourceProvider>,
        initiator: Arc<dyn CallInitiator>,
        config: ConferenceViewConfig,
    ) -> Self {
        let click_to_join = session
            .current_chat_transport()
            .protocol_provider()
            .supports(OperationSet::MultiUserChat);

        let state = Arc::new(ViewState {
            list: Mutex::new(ListState {
                rows: Vec::new(),
                selected: None,
            }),
            foreground: Mutex::new(None),
            resources,
            config,
        });
        state.reload_foreground();

        // Seed rows from what the store already holds, then follow changes.
        {
            let mut list = state.list.lock().expect("mutex should not be poisoned");
            list.rows = store
                .descriptions()
                .iter()
                .map(|description| ConferenceRow {
                    label: state.label_for(description),
                })
                .collect();
        }
        let subscription = store.subscribe(state.clone());

        Self {
            session,
            store,
            state,
            subscription,
            initiator,
            click_to_join,
        }
    }

    /// Drains announcements already cached on the session's room. See
    /// [`ConferenceStore::init_conferences`].
    pub fn init_conferences(&self) {
        self.store.init_conferences(&self.session);
    }

    pub fn add_conference(
        &self,
        description: ConferenceDescription,
    ) -> Result<bool, ConferenceError> {
        self.store.add(description)
    }

    pub fn remove_conference(&self, description: &ConferenceDescription) -> bool {
        self.store.remove(description)
    }

    /// Whether double-clicking a row will initiate a call.
    pub fn click_to_join_enabled(&self) -> bool {
        self.click_to_join
    }

    pub fn rows(&self) -> Vec<ConferenceRow> {
        self.state
            .list
            .lock()
            .expect("mutex should not be poisoned")
            .rows
            .clone()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.state
            .list
            .lock()
            .expect("mutex should not be poisoned")
            .selected
    }

    /// Sets the selection; an out-of-range row clears it.
    pub fn select_row(&self, row: Option<usize>) {
        let mut list = self.state.list.lock().expect("mutex should not be poisoned");
        let len = list.rows.len();
        list.selected = row.filter(|row| *row < len);
    }

    /// Type-ahead search: selects and returns the next row, cyclically after
    /// the current selection, whose label starts with `ch`
    /// (case-insensitively).
    pub fn search_key(&self, ch: char) -> Option<usize> {
        let mut list = self.state.list.lock().expect("mutex should not be poisoned");
        if list.rows.is_empty() {
            return None;
        }

        let needle = ch.to_lowercase().next().unwrap_or(ch);
        let start = match list.selected {
            Some(selected) => selected + 1,
            None => 0,
        };
        let len = list.rows.len();
        for offset in 0..len {
            let row = (start + offset) % len;
            let first = list.rows[row]
                .label
                .chars()
                .next()
                .map(|c| c.to_lowercase().next().unwrap_or(c));
            if first == Some(needle) {
                list.selected = Some(row);
                return Some(row);
            }
        }
        None
    }

    /// Currently resolved list foreground color, if the theme defines one.
    pub fn foreground_color(&self) -> Option<Color> {
        *self
            .state
            .foreground
            .lock()
            .expect("mutex should not be poisoned")
    }

    /// Re-resolves themeable colors from the resource provider.
    pub fn reload_theme(&self) {
        self.state.reload_foreground();
    }

    /// Handles a pointer click the hosting widget resolved to a row.
    ///
    /// A primary-button double-click selects the row and initiates a call to
    /// its conference; everything else (including any click while the
    /// session's provider lacks multi-user chat) is ignored. Returns whether
    /// a call was initiated.
    pub async fn pointer_clicked(&self, click: PointerClick) -> Result<bool, ConferenceError> {
        if !self.click_to_join {
            return Ok(false);
        }
        if click.button != PointerButton::Primary || click.click_count != 2 {
            return Ok(false);
        }

        self.select_row(Some(click.row));
        let description = match self.store.get(click.row) {
            Ok(description) => description,
            Err(_) => return Ok(false),
        };

        let provider = self.session.current_chat_transport().protocol_provider();
        debug!(
            "joining conference {} announced in the chat list",
            description.uri
        );
        self.initiator.call(provider, description).await?;
        Ok(true)
    }
}

impl Drop for ConferenceListView {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
