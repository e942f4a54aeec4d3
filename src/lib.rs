//! Presenter layer for the Mixtape media browser
//!
//! A [`DirectBodyPresenter`] keeps a [`BodyView`] in sync with a
//! [`ListDataSource`]: load results, whole-list replacement, per-item changes
//! and long-running operations are forwarded as view commands, and user input
//! from the view is handed to an optional [`BodyInputHandler`].
//!
//! - `model`: Library items, the data source contract and an in-memory source
//! - `view`: The body view contract and a headless view
//! - `presenter`: The presenter contract and the direct body presenter
//! - `config` / `logging`: Ambient setup for embedding applications

pub mod config;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod view;

pub use model::{
    Artwork, DataLoadedListener, DataModifiedListener, DataReplacedListener, DataSourceError,
    InMemoryListDataSource, ItemAddedListener, ItemModifiedListener, ItemMovedListener,
    ItemRemovedListener, LibraryItem, LibraryReadError, ListDataSource, ListenerSet,
    LongOperationListener,
};
pub use presenter::{BasePresenter, BodyInputHandler, DirectBodyPresenter};
pub use view::{
    BodyView, ContextualMenuItemSelectedListener, HeadlessBodyView, LibraryItemSelectedListener,
    MenuItem, ViewChange,
};
