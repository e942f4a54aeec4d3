//! Presenter that shows a list data source's items directly in a body view

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::{BasePresenter, BodyInputHandler};
use crate::model::{
    DataLoadedListener, DataModifiedListener, DataReplacedListener, ItemAddedListener,
    ItemModifiedListener, ItemMovedListener, ItemRemovedListener, LibraryItem, ListDataSource,
    LongOperationListener,
};
use crate::view::{
    BodyView, ContextualMenuItemSelectedListener, LibraryItemSelectedListener, MenuItem,
};

/// Mirrors the list of a [`ListDataSource`] in a [`BodyView`]
///
/// The presenter is registered with every data-source listener kind on the
/// current data source and with both input listener kinds on the current
/// view, and with nothing else. Replacing either collaborator unregisters
/// from the previous one first.
///
/// Callbacks may arrive on any thread. No lock is held while requesting a
/// load or issuing a view command, so a source may deliver its load result
/// before `load_data` returns. Late callbacks from a replaced data source are still
/// forwarded; sources that care must stop notifying once detached.
///
/// Collaborators hold the presenter's registrations strongly, so an attached
/// presenter stays alive with its data source or view. Detach both to release
/// it.
pub struct DirectBodyPresenter<T, S: ?Sized, V: ?Sized> {
    data_source: RwLock<Option<Arc<S>>>,
    view: RwLock<Option<Arc<V>>>,
    input_handler: Option<Arc<dyn BodyInputHandler<T>>>,
    this: Weak<Self>,
}

impl<T, S, V> DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    /// A presenter that ignores user input
    pub fn new() -> Arc<Self> {
        Self::build(None)
    }

    /// A presenter that hands user input to `handler`
    pub fn with_input_handler(handler: Arc<dyn BodyInputHandler<T>>) -> Arc<Self> {
        Self::build(Some(handler))
    }

    fn build(input_handler: Option<Arc<dyn BodyInputHandler<T>>>) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            data_source: RwLock::new(None),
            view: RwLock::new(None),
            input_handler,
            this: this.clone(),
        })
    }

    fn subscribe_to_data_source(&self, this: &Arc<Self>, data_source: &S) {
        data_source.register_data_replaced_listener(this.clone());
        data_source.register_data_modified_listener(this.clone());
        data_source.register_long_operation_listener(this.clone());
        data_source.register_item_added_listener(this.clone());
        data_source.register_item_removed_listener(this.clone());
        data_source.register_item_modified_listener(this.clone());
        data_source.register_item_moved_listener(this.clone());
    }

    fn unsubscribe_from_data_source(&self, this: &Arc<Self>, data_source: &S) {
        let replaced: Arc<dyn DataReplacedListener<T>> = this.clone();
        let modified: Arc<dyn DataModifiedListener<T>> = this.clone();
        let long_operation: Arc<dyn LongOperationListener<T>> = this.clone();
        let item_added: Arc<dyn ItemAddedListener<T>> = this.clone();
        let item_removed: Arc<dyn ItemRemovedListener<T>> = this.clone();
        let item_modified: Arc<dyn ItemModifiedListener<T>> = this.clone();
        let item_moved: Arc<dyn ItemMovedListener<T>> = this.clone();

        data_source.unregister_data_replaced_listener(&replaced);
        data_source.unregister_data_modified_listener(&modified);
        data_source.unregister_long_operation_listener(&long_operation);
        data_source.unregister_item_added_listener(&item_added);
        data_source.unregister_item_removed_listener(&item_removed);
        data_source.unregister_item_modified_listener(&item_modified);
        data_source.unregister_item_moved_listener(&item_moved);
    }

    fn register_for_view_input(&self, this: &Arc<Self>, view: &V) {
        view.add_library_item_selected_listener(this.clone());
        view.add_contextual_menu_item_selected_listener(this.clone());
    }

    fn unregister_from_view_input(&self, this: &Arc<Self>, view: &V) {
        let item_selected: Arc<dyn LibraryItemSelectedListener<T>> = this.clone();
        let menu_item_selected: Arc<dyn ContextualMenuItemSelectedListener<T>> = this.clone();

        view.remove_library_item_selected_listener(&item_selected);
        view.remove_contextual_menu_item_selected_listener(&menu_item_selected);
    }

    fn request_load(&self, this: &Arc<Self>, data_source: &S) {
        data_source.load_data(false, this.clone());
    }

    /// Run `command` against the attached view, if any
    fn with_view(&self, callback: &'static str, command: impl FnOnce(&V)) {
        let view = self.view.read().clone();
        match view {
            Some(view) => command(&*view),
            None => tracing::trace!(callback, "No view attached, dropping data source event"),
        }
    }
}

impl<T, S, V> BasePresenter<S, V> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn set_data_source(&self, data_source: Option<Arc<S>>) {
        // Only reachable while the presenter is being dropped
        let Some(this) = self.this.upgrade() else {
            return;
        };

        {
            let mut current = self.data_source.write();
            if let Some(previous) = current.as_deref() {
                self.unsubscribe_from_data_source(&this, previous);
            }
            *current = data_source.clone();
            if let Some(next) = current.as_deref() {
                self.subscribe_to_data_source(&this, next);
            }
        }

        tracing::debug!(attached = data_source.is_some(), "Data source set");

        match data_source {
            Some(data_source) => self.request_load(&this, &data_source),
            None => self.with_view("data_source_detached", |view| view.set_items(None)),
        }
    }

    fn data_source(&self) -> Option<Arc<S>> {
        self.data_source.read().clone()
    }

    fn set_view(&self, view: Option<Arc<V>>) {
        let Some(this) = self.this.upgrade() else {
            return;
        };

        {
            let mut current = self.view.write();
            if let Some(previous) = current.as_deref() {
                self.unregister_from_view_input(&this, previous);
            }
            *current = view.clone();
            if let Some(next) = current.as_deref() {
                self.register_for_view_input(&this, next);
            }
        }

        tracing::debug!(attached = view.is_some(), "View set");

        // Reloads even when the new view is None
        if let Some(data_source) = self.data_source() {
            self.request_load(&this, &data_source);
        }
    }

    fn view(&self) -> Option<Arc<V>> {
        self.view.read().clone()
    }
}

impl<T, S, V> DataLoadedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_data_loaded(&self, _source: &dyn ListDataSource<T>, data: &[T]) {
        self.with_view("data_loaded", |view| view.set_items(Some(data)));
    }

    fn on_load_data_failed(&self, _source: &dyn ListDataSource<T>) {
        tracing::debug!("Data source failed to load, clearing view");
        self.with_view("load_data_failed", |view| view.set_items(None));
    }
}

impl<T, S, V> DataReplacedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_data_replaced(&self, _source: &dyn ListDataSource<T>, _old_data: &[T], new_data: &[T]) {
        self.with_view("data_replaced", |view| view.set_items(Some(new_data)));
    }
}

impl<T, S, V> DataModifiedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_data_modified(&self, _source: &dyn ListDataSource<T>, _data: &[T]) {
        self.with_view("data_modified", |view| view.notify_items_changed());
    }
}

impl<T, S, V> LongOperationListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_long_operation_started(&self, _source: &dyn ListDataSource<T>) {
        self.with_view("long_operation_started", |view| view.show_loading_indicator(true));
    }

    fn on_long_operation_finished(&self, _source: &dyn ListDataSource<T>) {
        self.with_view("long_operation_finished", |view| view.show_loading_indicator(false));
    }
}

impl<T, S, V> ItemAddedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_item_added(&self, _source: &dyn ListDataSource<T>, _added: &T, index: usize) {
        self.with_view("item_added", |view| view.notify_item_added(index));
    }
}

impl<T, S, V> ItemRemovedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_item_removed(&self, _source: &dyn ListDataSource<T>, _removed: &T, index: usize) {
        self.with_view("item_removed", |view| view.notify_item_removed(index));
    }
}

impl<T, S, V> ItemModifiedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_item_modified(&self, _source: &dyn ListDataSource<T>, _modified: &T, index: usize) {
        self.with_view("item_modified", |view| view.notify_item_modified(index));
    }
}

impl<T, S, V> ItemMovedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_item_moved(
        &self,
        _source: &dyn ListDataSource<T>,
        _moved: &T,
        from_index: usize,
        to_index: usize,
    ) {
        self.with_view("item_moved", |view| {
            view.notify_item_moved(from_index, to_index)
        });
    }
}

impl<T, S, V> LibraryItemSelectedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_library_item_selected(&self, view: &dyn BodyView<T>, item: &T) {
        if let Some(handler) = &self.input_handler {
            handler.on_library_item_selected(view, item);
        }
    }
}

impl<T, S, V> ContextualMenuItemSelectedListener<T> for DirectBodyPresenter<T, S, V>
where
    T: LibraryItem + 'static,
    S: ListDataSource<T> + ?Sized + 'static,
    V: BodyView<T> + ?Sized + 'static,
{
    fn on_contextual_menu_item_selected(
        &self,
        view: &dyn BodyView<T>,
        item: &T,
        menu_item: &MenuItem,
    ) {
        if let Some(handler) = &self.input_handler {
            handler.on_contextual_menu_item_selected(view, item, menu_item);
        }
    }
}

impl<T, S: ?Sized, V: ?Sized> fmt::Debug for DirectBodyPresenter<T, S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectBodyPresenter")
            .field("has_data_source", &self.data_source.read().is_some())
            .field("has_view", &self.view.read().is_some())
            .field("has_input_handler", &self.input_handler.is_some())
            .finish()
    }
}
