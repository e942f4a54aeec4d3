//! Recording test doubles for the presenter tests

#![allow(dead_code)]

use std::sync::Arc;

use mixtape::{
    Artwork, BodyView, ContextualMenuItemSelectedListener, DataLoadedListener,
    DataModifiedListener, DataReplacedListener, ItemAddedListener, ItemModifiedListener,
    ItemMovedListener, ItemRemovedListener, LibraryItem, LibraryItemSelectedListener,
    LibraryReadError, ListDataSource, ListenerSet, LongOperationListener, MenuItem,
};
use parking_lot::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track(pub &'static str);

impl LibraryItem for Track {
    fn title(&self) -> Result<Option<String>, LibraryReadError> {
        Ok(Some(self.0.to_string()))
    }

    fn subtitle(&self) -> Result<Option<String>, LibraryReadError> {
        Ok(None)
    }

    fn artwork(&self, _width: u32, _height: u32) -> Result<Option<Artwork>, LibraryReadError> {
        Ok(None)
    }
}

pub fn tracks(titles: &[&'static str]) -> Vec<Track> {
    titles.iter().copied().map(Track).collect()
}

/// Address of the object behind an `Arc`, ignoring any vtable
pub fn addr<L: ?Sized>(listener: &Arc<L>) -> usize {
    Arc::as_ptr(listener).cast::<()>() as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceListenerKind {
    DataReplaced,
    DataModified,
    LongOperation,
    ItemAdded,
    ItemRemoved,
    ItemModified,
    ItemMoved,
}

pub const ALL_SOURCE_LISTENER_KINDS: [SourceListenerKind; 7] = [
    SourceListenerKind::DataReplaced,
    SourceListenerKind::DataModified,
    SourceListenerKind::LongOperation,
    SourceListenerKind::ItemAdded,
    SourceListenerKind::ItemRemoved,
    SourceListenerKind::ItemModified,
    SourceListenerKind::ItemMoved,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceCall {
    Register(SourceListenerKind),
    Unregister(SourceListenerKind),
    Load { force_reload: bool },
}

/// How a [`SpySource`] answers `load_data`
#[derive(Clone, Debug)]
pub enum LoadBehavior {
    /// Deliver the items before `load_data` returns
    Deliver(Vec<Track>),
    /// Report a failure before `load_data` returns
    Fail,
    /// Keep the callback until [`SpySource::complete_pending`] is called
    Defer(Vec<Track>),
}

pub struct SpySource {
    behavior: Mutex<LoadBehavior>,
    calls: Mutex<Vec<SourceCall>>,
    registrations: Mutex<Vec<(SourceListenerKind, usize)>>,
    pending: Mutex<Vec<Arc<dyn DataLoadedListener<Track>>>>,
}

impl SpySource {
    pub fn new(behavior: LoadBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior: Mutex::new(behavior),
            calls: Mutex::new(Vec::new()),
            registrations: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
        })
    }

    pub fn delivering(items: Vec<Track>) -> Arc<Self> {
        Self::new(LoadBehavior::Deliver(items))
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn load_requests(&self) -> Vec<bool> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                SourceCall::Load { force_reload } => Some(*force_reload),
                _ => None,
            })
            .collect()
    }

    /// Kinds under which the object at `listener` is currently registered
    pub fn registered_kinds(&self, listener: usize) -> Vec<SourceListenerKind> {
        self.registrations
            .lock()
            .iter()
            .filter(|(_, registered)| *registered == listener)
            .map(|(kind, _)| *kind)
            .collect()
    }

    pub fn is_fully_registered(&self, listener: usize) -> bool {
        let kinds = self.registered_kinds(listener);
        kinds.len() == ALL_SOURCE_LISTENER_KINDS.len()
            && ALL_SOURCE_LISTENER_KINDS.iter().all(|kind| kinds.contains(kind))
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.lock().len()
    }

    /// Deliver every deferred load
    pub fn complete_pending(&self) {
        let pending = std::mem::take(&mut *self.pending.lock());
        let items = match &*self.behavior.lock() {
            LoadBehavior::Deliver(items) | LoadBehavior::Defer(items) => Some(items.clone()),
            LoadBehavior::Fail => None,
        };

        for callback in pending {
            match &items {
                Some(items) => callback.on_data_loaded(self, items),
                None => callback.on_load_data_failed(self),
            }
        }
    }

    fn register(&self, kind: SourceListenerKind, listener: usize) {
        self.calls.lock().push(SourceCall::Register(kind));
        let mut registrations = self.registrations.lock();
        if !registrations.contains(&(kind, listener)) {
            registrations.push((kind, listener));
        }
    }

    fn unregister(&self, kind: SourceListenerKind, listener: usize) {
        self.calls.lock().push(SourceCall::Unregister(kind));
        self.registrations
            .lock()
            .retain(|entry| *entry != (kind, listener));
    }
}

impl ListDataSource<Track> for SpySource {
    fn load_data(&self, force_reload: bool, callback: Arc<dyn DataLoadedListener<Track>>) {
        self.calls.lock().push(SourceCall::Load { force_reload });

        let behavior = self.behavior.lock().clone();
        match behavior {
            LoadBehavior::Deliver(items) => callback.on_data_loaded(self, &items),
            LoadBehavior::Fail => callback.on_load_data_failed(self),
            LoadBehavior::Defer(_) => self.pending.lock().push(callback),
        }
    }

    fn register_data_replaced_listener(&self, listener: Arc<dyn DataReplacedListener<Track>>) {
        self.register(SourceListenerKind::DataReplaced, addr(&listener));
    }

    fn unregister_data_replaced_listener(&self, listener: &Arc<dyn DataReplacedListener<Track>>) {
        self.unregister(SourceListenerKind::DataReplaced, addr(listener));
    }

    fn register_data_modified_listener(&self, listener: Arc<dyn DataModifiedListener<Track>>) {
        self.register(SourceListenerKind::DataModified, addr(&listener));
    }

    fn unregister_data_modified_listener(&self, listener: &Arc<dyn DataModifiedListener<Track>>) {
        self.unregister(SourceListenerKind::DataModified, addr(listener));
    }

    fn register_long_operation_listener(&self, listener: Arc<dyn LongOperationListener<Track>>) {
        self.register(SourceListenerKind::LongOperation, addr(&listener));
    }

    fn unregister_long_operation_listener(&self, listener: &Arc<dyn LongOperationListener<Track>>) {
        self.unregister(SourceListenerKind::LongOperation, addr(listener));
    }

    fn register_item_added_listener(&self, listener: Arc<dyn ItemAddedListener<Track>>) {
        self.register(SourceListenerKind::ItemAdded, addr(&listener));
    }

    fn unregister_item_added_listener(&self, listener: &Arc<dyn ItemAddedListener<Track>>) {
        self.unregister(SourceListenerKind::ItemAdded, addr(listener));
    }

    fn register_item_removed_listener(&self, listener: Arc<dyn ItemRemovedListener<Track>>) {
        self.register(SourceListenerKind::ItemRemoved, addr(&listener));
    }

    fn unregister_item_removed_listener(&self, listener: &Arc<dyn ItemRemovedListener<Track>>) {
        self.unregister(SourceListenerKind::ItemRemoved, addr(listener));
    }

    fn register_item_modified_listener(&self, listener: Arc<dyn ItemModifiedListener<Track>>) {
        self.register(SourceListenerKind::ItemModified, addr(&listener));
    }

    fn unregister_item_modified_listener(&self, listener: &Arc<dyn ItemModifiedListener<Track>>) {
        self.unregister(SourceListenerKind::ItemModified, addr(listener));
    }

    fn register_item_moved_listener(&self, listener: Arc<dyn ItemMovedListener<Track>>) {
        self.register(SourceListenerKind::ItemMoved, addr(&listener));
    }

    fn unregister_item_moved_listener(&self, listener: &Arc<dyn ItemMovedListener<Track>>) {
        self.unregister(SourceListenerKind::ItemMoved, addr(listener));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCall {
    SetItems(Option<Vec<Track>>),
    ItemsChanged,
    ItemAdded(usize),
    ItemRemoved(usize),
    ItemModified(usize),
    ItemMoved(usize, usize),
    LoadingIndicator(bool),
}

pub struct SpyView {
    calls: Mutex<Vec<ViewCall>>,
    item_selected: ListenerSet<dyn LibraryItemSelectedListener<Track>>,
    menu_item_selected: ListenerSet<dyn ContextualMenuItemSelectedListener<Track>>,
}

impl SpyView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            item_selected: ListenerSet::new(),
            menu_item_selected: ListenerSet::new(),
        })
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, call: &ViewCall) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn item_selected_listeners(&self) -> Vec<usize> {
        self.item_selected.snapshot().iter().map(addr).collect()
    }

    pub fn menu_item_selected_listeners(&self) -> Vec<usize> {
        self.menu_item_selected.snapshot().iter().map(addr).collect()
    }

    pub fn fire_item_selected(&self, item: &Track) {
        for listener in self.item_selected.snapshot() {
            listener.on_library_item_selected(self, item);
        }
    }

    pub fn fire_menu_item_selected(&self, item: &Track, menu_item: &MenuItem) {
        for listener in self.menu_item_selected.snapshot() {
            listener.on_contextual_menu_item_selected(self, item, menu_item);
        }
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().push(call);
    }
}

impl BodyView<Track> for SpyView {
    fn set_items(&self, items: Option<&[Track]>) {
        self.record(ViewCall::SetItems(items.map(<[Track]>::to_vec)));
    }

    fn notify_items_changed(&self) {
        self.record(ViewCall::ItemsChanged);
    }

    fn notify_item_added(&self, index: usize) {
        self.record(ViewCall::ItemAdded(index));
    }

    fn notify_item_removed(&self, index: usize) {
        self.record(ViewCall::ItemRemoved(index));
    }

    fn notify_item_modified(&self, index: usize) {
        self.record(ViewCall::ItemModified(index));
    }

    fn notify_item_moved(&self, from_index: usize, to_index: usize) {
        self.record(ViewCall::ItemMoved(from_index, to_index));
    }

    fn show_loading_indicator(&self, show: bool) {
        self.record(ViewCall::LoadingIndicator(show));
    }

    fn add_library_item_selected_listener(
        &self,
        listener: Arc<dyn LibraryItemSelectedListener<Track>>,
    ) {
        self.item_selected.register(listener);
    }

    fn remove_library_item_selected_listener(
        &self,
        listener: &Arc<dyn LibraryItemSelectedListener<Track>>,
    ) {
        self.item_selected.unregister(listener);
    }

    fn add_contextual_menu_item_selected_listener(
        &self,
        listener: Arc<dyn ContextualMenuItemSelectedListener<Track>>,
    ) {
        self.menu_item_selected.register(listener);
    }

    fn remove_contextual_menu_item_selected_listener(
        &self,
        listener: &Arc<dyn ContextualMenuItemSelectedListener<Track>>,
    ) {
        self.menu_item_selected.unregister(listener);
    }
}
