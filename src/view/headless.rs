//! Headless body view
//!
//! Keeps what a real view would show in memory and logs every command
//! through `tracing`. User input is simulated with [`HeadlessBodyView::select_item`]
//! and [`HeadlessBodyView::select_menu_item`].

use std::sync::Arc;

use parking_lot::RwLock;

use super::body::{BodyView, ContextualMenuItemSelectedListener, LibraryItemSelectedListener};
use super::menu::MenuItem;
use crate::model::ListenerSet;

/// Structural change reported to a view since the last full refresh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewChange {
    ItemsChanged,
    Added(usize),
    Removed(usize),
    Modified(usize),
    Moved { from: usize, to: usize },
}

struct DisplayState<T> {
    items: Option<Vec<T>>,
    loading: bool,
    pending_changes: Vec<ViewChange>,
}

pub struct HeadlessBodyView<T> {
    name: String,
    state: RwLock<DisplayState<T>>,
    item_selected_listeners: ListenerSet<dyn LibraryItemSelectedListener<T>>,
    menu_item_selected_listeners: ListenerSet<dyn ContextualMenuItemSelectedListener<T>>,
}

impl<T> HeadlessBodyView<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(DisplayState {
                items: None,
                loading: false,
                pending_changes: Vec::new(),
            }),
            item_selected_listeners: ListenerSet::new(),
            menu_item_selected_listeners: ListenerSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items currently displayed, `None` for the empty state
    pub fn displayed_items(&self) -> Option<Vec<T>> {
        self.state.read().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Drain the structural changes reported since the last call or the last
    /// `set_items`
    pub fn take_changes(&self) -> Vec<ViewChange> {
        std::mem::take(&mut self.state.write().pending_changes)
    }

    /// Simulate the user selecting the displayed item at `index`.
    /// Returns `false` if no such item is displayed.
    pub fn select_item(&self, index: usize) -> bool {
        let Some(item) = self.displayed_item(index) else {
            return false;
        };

        tracing::debug!(view = %self.name, index, "Library item selected");
        for listener in self.item_selected_listeners.snapshot() {
            listener.on_library_item_selected(self, &item);
        }
        true
    }

    /// Simulate the user picking `menu_item` from the contextual menu of the
    /// displayed item at `index`. Returns `false` if no such item is displayed.
    pub fn select_menu_item(&self, index: usize, menu_item: &MenuItem) -> bool {
        let Some(item) = self.displayed_item(index) else {
            return false;
        };

        tracing::debug!(
            view = %self.name,
            index,
            menu_item = menu_item.id,
            "Contextual menu item selected"
        );
        for listener in self.menu_item_selected_listeners.snapshot() {
            listener.on_contextual_menu_item_selected(self, &item, menu_item);
        }
        true
    }

    fn displayed_item(&self, index: usize) -> Option<T> {
        self.state
            .read()
            .items
            .as_ref()
            .and_then(|items| items.get(index).cloned())
    }

    fn record(&self, change: ViewChange) {
        tracing::trace!(view = %self.name, ?change, "View change");
        self.state.write().pending_changes.push(change);
    }
}

impl<T> BodyView<T> for HeadlessBodyView<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn set_items(&self, items: Option<&[T]>) {
        tracing::debug!(view = %self.name, len = items.map(<[T]>::len), "Setting items");
        let mut state = self.state.write();
        state.items = items.map(<[T]>::to_vec);
        state.pending_changes.clear();
    }

    fn notify_items_changed(&self) {
        self.record(ViewChange::ItemsChanged);
    }

    fn notify_item_added(&self, index: usize) {
        self.record(ViewChange::Added(index));
    }

    fn notify_item_removed(&self, index: usize) {
        self.record(ViewChange::Removed(index));
    }

    fn notify_item_modified(&self, index: usize) {
        self.record(ViewChange::Modified(index));
    }

    fn notify_item_moved(&self, from_index: usize, to_index: usize) {
        self.record(ViewChange::Moved {
            from: from_index,
            to: to_index,
        });
    }

    fn show_loading_indicator(&self, show: bool) {
        tracing::debug!(view = %self.name, show, "Loading indicator");
        self.state.write().loading = show;
    }

    fn add_library_item_selected_listener(
        &self,
        listener: Arc<dyn LibraryItemSelectedListener<T>>,
    ) {
        self.item_selected_listeners.register(listener);
    }

    fn remove_library_item_selected_listener(
        &self,
        listener: &Arc<dyn LibraryItemSelectedListener<T>>,
    ) {
        self.item_selected_listeners.unregister(listener);
    }

    fn add_contextual_menu_item_selected_listener(
        &self,
        listener: Arc<dyn ContextualMenuItemSelectedListener<T>>,
    ) {
        self.menu_item_selected_listeners.register(listener);
    }

    fn remove_contextual_menu_item_selected_listener(
        &self,
        listener: &Arc<dyn ContextualMenuItemSelectedListener<T>>,
    ) {
        self.menu_item_selected_listeners.unregister(listener);
    }
}
