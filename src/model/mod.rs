//! Model module - Library items and list data sources
//!
//! - `library_item`: The displayable item contract and its read errors
//! - `data_source`: The list data source contract and its listener traits
//! - `listeners`: Identity-keyed listener registry
//! - `memory`: Settable in-memory data source

mod library_item;
mod data_source;
mod listeners;
mod memory;

pub use library_item::{Artwork, LibraryItem, LibraryReadError};

pub use data_source::{
    DataLoadedListener, DataModifiedListener, DataReplacedListener, ItemAddedListener,
    ItemModifiedListener, ItemMovedListener, ItemRemovedListener, ListDataSource,
    LongOperationListener,
};

pub use listeners::ListenerSet;

pub use memory::{DataSourceError, InMemoryListDataSource};
