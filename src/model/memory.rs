//! Settable in-memory list data source
//!
//! Loads complete synchronously, before `load_data` returns, bracketed by
//! long-operation notifications. Useful for fixed lists, previews and tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use thiserror::Error;

use super::data_source::{
    DataLoadedListener, DataModifiedListener, DataReplacedListener, ItemAddedListener,
    ItemModifiedListener, ItemMovedListener, ItemRemovedListener, ListDataSource,
    LongOperationListener,
};
use super::library_item::LibraryReadError;
use super::listeners::ListenerSet;

/// Rejected mutation of an [`InMemoryListDataSource`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("index {index} is out of bounds for a list of {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}

struct Listeners<T> {
    data_replaced: ListenerSet<dyn DataReplacedListener<T>>,
    data_modified: ListenerSet<dyn DataModifiedListener<T>>,
    long_operation: ListenerSet<dyn LongOperationListener<T>>,
    item_added: ListenerSet<dyn ItemAddedListener<T>>,
    item_removed: ListenerSet<dyn ItemRemovedListener<T>>,
    item_modified: ListenerSet<dyn ItemModifiedListener<T>>,
    item_moved: ListenerSet<dyn ItemMovedListener<T>>,
}

/// A [`ListDataSource`] backed by a `Vec`
///
/// Every mutation notifies the matching listeners after the list lock has
/// been released, so listeners may read the source from their callback.
pub struct InMemoryListDataSource<T> {
    items: RwLock<Vec<T>>,
    fail_next_load: AtomicBool,
    listeners: Listeners<T>,
}

impl<T> InMemoryListDataSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            fail_next_load: AtomicBool::new(false),
            listeners: Listeners {
                data_replaced: ListenerSet::new(),
                data_modified: ListenerSet::new(),
                long_operation: ListenerSet::new(),
                item_added: ListenerSet::new(),
                item_removed: ListenerSet::new(),
                item_modified: ListenerSet::new(),
                item_moved: ListenerSet::new(),
            },
        }
    }

    /// Copy of the current list
    pub fn items(&self) -> Vec<T> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Make the next `load_data` report a failure instead of the list
    pub fn fail_next_load(&self) {
        self.fail_next_load.store(true, Ordering::SeqCst);
    }

    /// Replace the whole list
    pub fn set_data(&self, items: Vec<T>) {
        let old_items = std::mem::replace(&mut *self.items.write(), items.clone());
        tracing::debug!(old_len = old_items.len(), new_len = items.len(), "Data replaced");

        for listener in self.listeners.data_replaced.snapshot() {
            listener.on_data_replaced(self, &old_items, &items);
        }
    }

    /// Mutate the list in place and notify data-modified listeners
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        let snapshot = {
            let mut items = self.items.write();
            f(&mut items);
            items.clone()
        };

        for listener in self.listeners.data_modified.snapshot() {
            listener.on_data_modified(self, &snapshot);
        }
    }

    /// Reload the list through `loader`, bracketed by long-operation
    /// notifications. A failed loader leaves the current list untouched.
    pub fn refresh_with<F>(&self, loader: F) -> Result<(), LibraryReadError>
    where
        F: FnOnce() -> Result<Vec<T>, LibraryReadError>,
    {
        self.notify_long_operation_started();

        let result = loader();
        let outcome = match result {
            Ok(items) => {
                self.set_data(items);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Refresh failed, keeping current items");
                Err(e)
            }
        };

        self.notify_long_operation_finished();

        outcome
    }

    fn notify_long_operation_started(&self) {
        for listener in self.listeners.long_operation.snapshot() {
            listener.on_long_operation_started(self);
        }
    }

    fn notify_long_operation_finished(&self) {
        for listener in self.listeners.long_operation.snapshot() {
            listener.on_long_operation_finished(self);
        }
    }

    pub fn insert(&self, index: usize, item: T) -> Result<(), DataSourceError> {
        {
            let mut items = self.items.write();
            if index > items.len() {
                return Err(DataSourceError::IndexOutOfBounds {
                    index,
                    len: items.len(),
                });
            }
            items.insert(index, item.clone());
        }

        for listener in self.listeners.item_added.snapshot() {
            listener.on_item_added(self, &item, index);
        }
        Ok(())
    }

    pub fn push(&self, item: T) {
        let index = {
            let mut items = self.items.write();
            items.push(item.clone());
            items.len() - 1
        };

        for listener in self.listeners.item_added.snapshot() {
            listener.on_item_added(self, &item, index);
        }
    }

    pub fn remove(&self, index: usize) -> Result<T, DataSourceError> {
        let removed = {
            let mut items = self.items.write();
            check_bounds(index, items.len())?;
            items.remove(index)
        };

        for listener in self.listeners.item_removed.snapshot() {
            listener.on_item_removed(self, &removed, index);
        }
        Ok(removed)
    }

    /// Swap the item at `index` for `item`, returning the previous one
    pub fn replace_item(&self, index: usize, item: T) -> Result<T, DataSourceError> {
        let previous = {
            let mut items = self.items.write();
            check_bounds(index, items.len())?;
            std::mem::replace(&mut items[index], item.clone())
        };

        for listener in self.listeners.item_modified.snapshot() {
            listener.on_item_modified(self, &item, index);
        }
        Ok(previous)
    }

    pub fn move_item(&self, from_index: usize, to_index: usize) -> Result<(), DataSourceError> {
        let moved = {
            let mut items = self.items.write();
            let len = items.len();
            check_bounds(from_index, len)?;
            check_bounds(to_index, len)?;
            let moved = items.remove(from_index);
            items.insert(to_index, moved.clone());
            moved
        };

        for listener in self.listeners.item_moved.snapshot() {
            listener.on_item_moved(self, &moved, from_index, to_index);
        }
        Ok(())
    }
}

impl<T> Default for InMemoryListDataSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

fn check_bounds(index: usize, len: usize) -> Result<(), DataSourceError> {
    if index < len {
        Ok(())
    } else {
        Err(DataSourceError::IndexOutOfBounds { index, len })
    }
}

impl<T> ListDataSource<T> for InMemoryListDataSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn load_data(&self, force_reload: bool, callback: Arc<dyn DataLoadedListener<T>>) {
        self.notify_long_operation_started();

        if self.fail_next_load.swap(false, Ordering::SeqCst) {
            tracing::debug!(force_reload, "Load failed");
            callback.on_load_data_failed(self);
        } else {
            let items = self.items();
            tracing::trace!(force_reload, len = items.len(), "Load completed");
            callback.on_data_loaded(self, &items);
        }

        self.notify_long_operation_finished();
    }

    fn register_data_replaced_listener(&self, listener: Arc<dyn DataReplacedListener<T>>) {
        self.listeners.data_replaced.register(listener);
    }

    fn unregister_data_replaced_listener(&self, listener: &Arc<dyn DataReplacedListener<T>>) {
        self.listeners.data_replaced.unregister(listener);
    }

    fn register_data_modified_listener(&self, listener: Arc<dyn DataModifiedListener<T>>) {
        self.listeners.data_modified.register(listener);
    }

    fn unregister_data_modified_listener(&self, listener: &Arc<dyn DataModifiedListener<T>>) {
        self.listeners.data_modified.unregister(listener);
    }

    fn register_long_operation_listener(&self, listener: Arc<dyn LongOperationListener<T>>) {
        self.listeners.long_operation.register(listener);
    }

    fn unregister_long_operation_listener(&self, listener: &Arc<dyn LongOperationListener<T>>) {
        self.listeners.long_operation.unregister(listener);
    }

    fn register_item_added_listener(&self, listener: Arc<dyn ItemAddedListener<T>>) {
        self.listeners.item_added.register(listener);
    }

    fn unregister_item_added_listener(&self, listener: &Arc<dyn ItemAddedListener<T>>) {
        self.listeners.item_added.unregister(listener);
    }

    fn register_item_removed_listener(&self, listener: Arc<dyn ItemRemovedListener<T>>) {
        self.listeners.item_removed.register(listener);
    }

    fn unregister_item_removed_listener(&self, listener: &Arc<dyn ItemRemovedListener<T>>) {
        self.listeners.item_removed.unregister(listener);
    }

    fn register_item_modified_listener(&self, listener: Arc<dyn ItemModifiedListener<T>>) {
        self.listeners.item_modified.register(listener);
    }

    fn unregister_item_modified_listener(&self, listener: &Arc<dyn ItemModifiedListener<T>>) {
        self.listeners.item_modified.unregister(listener);
    }

    fn register_item_moved_listener(&self, listener: Arc<dyn ItemMovedListener<T>>) {
        self.listeners.item_moved.register(listener);
    }

    fn unregister_item_moved_listener(&self, listener: &Arc<dyn ItemMovedListener<T>>) {
        self.listeners.item_moved.unregister(listener);
    }
}
