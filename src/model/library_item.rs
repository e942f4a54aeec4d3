//! Library item access and read errors

use std::sync::Arc;
use thiserror::Error;

/// Failure to read an attribute of a library item from its backing store
#[derive(Debug, Error)]
pub enum LibraryReadError {
    /// A single attribute could not be read
    #[error("failed to read {field} from library: {reason}")]
    Field { field: &'static str, reason: String },

    /// The backing store failed with an I/O error
    #[error("I/O error while reading library: {0}")]
    Io(#[from] std::io::Error),

    /// The item no longer exists in the backing store
    #[error("library item is no longer available")]
    Unavailable,
}

/// Decoded artwork for a library item
///
/// Stands in for the platform bitmap type. Pixels are row-major RGBA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Artwork {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { width, height, pixels }
    }
}

/// One displayable media entry (song, album, artist, ...)
///
/// Every accessor may hit the backing store and therefore may fail. Callers
/// that display items (data sources, views) are expected to handle the
/// error; presenters never call these accessors.
pub trait LibraryItem: Send + Sync {
    /// The item's title, if it has one
    fn title(&self) -> Result<Option<String>, LibraryReadError>;

    /// The item's subtitle, if it has one
    fn subtitle(&self) -> Result<Option<String>, LibraryReadError>;

    /// The item's artwork scaled towards `width` x `height`, if it has any
    fn artwork(&self, width: u32, height: u32) -> Result<Option<Artwork>, LibraryReadError>;
}

impl<L: LibraryItem + ?Sized> LibraryItem for Arc<L> {
    fn title(&self) -> Result<Option<String>, LibraryReadError> {
        (**self).title()
    }

    fn subtitle(&self) -> Result<Option<String>, LibraryReadError> {
        (**self).subtitle()
    }

    fn artwork(&self, width: u32, height: u32) -> Result<Option<Artwork>, LibraryReadError> {
        (**self).artwork(width, height)
    }
}
