//! View module - Passive display surfaces
//!
//! - `body`: The body view contract and its input listener traits
//! - `menu`: Contextual menu entries
//! - `headless`: A view that keeps displayed state in memory and logs commands

mod body;
mod menu;
mod headless;

pub use body::{BodyView, ContextualMenuItemSelectedListener, LibraryItemSelectedListener};
pub use menu::MenuItem;
pub use headless::{HeadlessBodyView, ViewChange};
