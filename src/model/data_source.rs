//! List data source contract and the listeners it notifies
//!
//! Every event kind has its own listener trait so implementors only take on
//! the callbacks they care about and each callback keeps its exact signature.
//! Listener identity is the identity of the registered `Arc`: unregistering
//! with a clone of the same `Arc` removes the registration.

use std::sync::Arc;

/// Receives the outcome of a single [`ListDataSource::load_data`] request
pub trait DataLoadedListener<T>: Send + Sync {
    /// The load finished and produced `data`
    fn on_data_loaded(&self, source: &dyn ListDataSource<T>, data: &[T]);

    /// The load could not be completed
    fn on_load_data_failed(&self, source: &dyn ListDataSource<T>);
}

/// Notified when the whole list is swapped for a new one
pub trait DataReplacedListener<T>: Send + Sync {
    fn on_data_replaced(&self, source: &dyn ListDataSource<T>, old_data: &[T], new_data: &[T]);
}

/// Notified when the list was changed in place in a way not covered by the
/// per-item listeners
pub trait DataModifiedListener<T>: Send + Sync {
    fn on_data_modified(&self, source: &dyn ListDataSource<T>, data: &[T]);
}

/// Brackets long-running source activity such as a reload
pub trait LongOperationListener<T>: Send + Sync {
    fn on_long_operation_started(&self, source: &dyn ListDataSource<T>);

    fn on_long_operation_finished(&self, source: &dyn ListDataSource<T>);
}

pub trait ItemAddedListener<T>: Send + Sync {
    fn on_item_added(&self, source: &dyn ListDataSource<T>, added: &T, index: usize);
}

pub trait ItemRemovedListener<T>: Send + Sync {
    fn on_item_removed(&self, source: &dyn ListDataSource<T>, removed: &T, index: usize);
}

pub trait ItemModifiedListener<T>: Send + Sync {
    fn on_item_modified(&self, source: &dyn ListDataSource<T>, modified: &T, index: usize);
}

pub trait ItemMovedListener<T>: Send + Sync {
    fn on_item_moved(
        &self,
        source: &dyn ListDataSource<T>,
        moved: &T,
        from_index: usize,
        to_index: usize,
    );
}

/// An ordered, asynchronously loaded list of items
///
/// Implementations decide where and when callbacks run. Registered listeners
/// are held until unregistered (see [`ListenerSet`](super::ListenerSet)).
///
/// The register/unregister methods are called while the presenter holds its
/// own non-reentrant lock. They must not call back into the presenter (its
/// accessors, its `Debug` impl or its listener callbacks) before returning;
/// `load_data` is not subject to this and may deliver synchronously.
pub trait ListDataSource<T>: Send + Sync {
    /// Request the current list. The result is delivered to `callback`,
    /// possibly before this call returns. Cached data may be reused unless
    /// `force_reload` is set.
    fn load_data(&self, force_reload: bool, callback: Arc<dyn DataLoadedListener<T>>);

    fn register_data_replaced_listener(&self, listener: Arc<dyn DataReplacedListener<T>>);
    fn unregister_data_replaced_listener(&self, listener: &Arc<dyn DataReplacedListener<T>>);

    fn register_data_modified_listener(&self, listener: Arc<dyn DataModifiedListener<T>>);
    fn unregister_data_modified_listener(&self, listener: &Arc<dyn DataModifiedListener<T>>);

    fn register_long_operation_listener(&self, listener: Arc<dyn LongOperationListener<T>>);
    fn unregister_long_operation_listener(&self, listener: &Arc<dyn LongOperationListener<T>>);

    fn register_item_added_listener(&self, listener: Arc<dyn ItemAddedListener<T>>);
    fn unregister_item_added_listener(&self, listener: &Arc<dyn ItemAddedListener<T>>);

    fn register_item_removed_listener(&self, listener: Arc<dyn ItemRemovedListener<T>>);
    fn unregister_item_removed_listener(&self, listener: &Arc<dyn ItemRemovedListener<T>>);

    fn register_item_modified_listener(&self, listener: Arc<dyn ItemModifiedListener<T>>);
    fn unregister_item_modified_listener(&self, listener: &Arc<dyn ItemModifiedListener<T>>);

    fn register_item_moved_listener(&self, listener: Arc<dyn ItemMovedListener<T>>);
    fn unregister_item_moved_listener(&self, listener: &Arc<dyn ItemMovedListener<T>>);
}
