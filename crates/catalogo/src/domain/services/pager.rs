use crate::domain::entities::page::Page;

/// Cursors of the last successfully fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    next: Option<String>,
    prev: Option<String>,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both cursors are overwritten, an absent cursor means there is no such page
    pub fn update(&mut self, page: &Page) {
        self.next = page.next.clone();
        self.prev = page.prev.clone();
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn prev(&self) -> Option<&str> {
        self.prev.as_deref()
    }
}
