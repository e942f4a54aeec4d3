//! Presenter module - Binding data sources to views
//!
//! - `direct_body`: Presenter that mirrors a list data source in a body view

mod direct_body;

use std::sync::Arc;

use crate::view::{BodyView, MenuItem};

pub use direct_body::DirectBodyPresenter;

/// A presenter binding at most one data source of type `S` to at most one
/// view of type `V`
pub trait BasePresenter<S: ?Sized, V: ?Sized> {
    /// Replace the data source. `None` detaches the current one.
    fn set_data_source(&self, data_source: Option<Arc<S>>);

    fn data_source(&self) -> Option<Arc<S>>;

    /// Replace the view. `None` detaches the current one.
    fn set_view(&self, view: Option<Arc<V>>);

    fn view(&self) -> Option<Arc<V>>;
}

/// User input handling plugged into a presenter
///
/// Both methods do nothing by default; implement the ones you need.
pub trait BodyInputHandler<T>: Send + Sync {
    fn on_library_item_selected(&self, _view: &dyn BodyView<T>, _item: &T) {}

    fn on_contextual_menu_item_selected(
        &self,
        _view: &dyn BodyView<T>,
        _item: &T,
        _menu_item: &MenuItem,
    ) {
    }
}
