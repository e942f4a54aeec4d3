//! Body view contract
//!
//! A body view shows the list of library items of the current screen. It
//! only executes commands and reports user input; it never reads from a
//! data source itself.

use std::sync::Arc;

use super::menu::MenuItem;

/// Notified when the user selects an item in a [`BodyView`]
pub trait LibraryItemSelectedListener<T>: Send + Sync {
    fn on_library_item_selected(&self, view: &dyn BodyView<T>, item: &T);
}

/// Notified when the user picks an entry of an item's contextual menu
pub trait ContextualMenuItemSelectedListener<T>: Send + Sync {
    fn on_contextual_menu_item_selected(
        &self,
        view: &dyn BodyView<T>,
        item: &T,
        menu_item: &MenuItem,
    );
}

/// Display commands may arrive on any thread and are issued with no
/// presenter lock held. The add/remove listener methods, however, run while
/// the presenter holds its own non-reentrant lock: they must not call back
/// into the presenter (its accessors, its `Debug` impl or its listener
/// callbacks) before returning.
pub trait BodyView<T>: Send + Sync {
    /// Display `items`, or an empty state when `None`
    fn set_items(&self, items: Option<&[T]>);

    /// The displayed items changed in a way that needs a full redraw
    fn notify_items_changed(&self);

    fn notify_item_added(&self, index: usize);

    fn notify_item_removed(&self, index: usize);

    fn notify_item_modified(&self, index: usize);

    fn notify_item_moved(&self, from_index: usize, to_index: usize);

    fn show_loading_indicator(&self, show: bool);

    fn add_library_item_selected_listener(
        &self,
        listener: Arc<dyn LibraryItemSelectedListener<T>>,
    );
    fn remove_library_item_selected_listener(
        &self,
        listener: &Arc<dyn LibraryItemSelectedListener<T>>,
    );

    fn add_contextual_menu_item_selected_listener(
        &self,
        listener: Arc<dyn ContextualMenuItemSelectedListener<T>>,
    );
    fn remove_contextual_menu_item_selected_listener(
        &self,
        listener: &Arc<dyn ContextualMenuItemSelectedListener<T>>,
    );
}
