//! User selection over the current catalog

use std::collections::BTreeSet;

/// Chosen keyword indices plus at most one chosen title index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    keywords: BTreeSet<usize>,
    title: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`. Returns whether it is selected afterwards.
    pub fn toggle_keyword(&mut self, index: usize) -> bool {
        if self.keywords.remove(&index) {
            false
        } else {
            self.keywords.insert(index);
            true
        }
    }

    /// Replace the selected title
    pub fn select_title(&mut self, index: usize) {
        self.title = Some(index);
    }

    pub fn is_keyword_selected(&self, index: usize) -> bool {
        self.keywords.contains(&index)
    }

    pub fn is_title_selected(&self, index: usize) -> bool {
        self.title == Some(index)
    }

    /// Selected keyword indices, ascending
    pub fn keywords(&self) -> impl Iterator<Item = usize> + '_ {
        self.keywords.iter().copied()
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn title(&self) -> Option<usize> {
        self.title
    }

    /// Nothing selected at all
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.title.is_none()
    }

    pub fn clear(&mut self) {
        self.keywords.clear();
        self.title = None;
    }
}
