//! Contextual menu entries

/// An entry of the contextual menu a view shows for a library item
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub id: u32,
    pub title: String,
}

impl MenuItem {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
