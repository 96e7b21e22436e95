use crate::common::models::Amphibian;
use std::collections::HashSet;

/// What the home screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Loading,
    Success(Vec<Amphibian>),
    Error,
}

/// Expanded/collapsed flags for the cards of the current list.
///
/// Cards are identified by their position in the list, so two records sharing a name
/// still toggle independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedCards {
    expanded: HashSet<usize>,
}

impl ExpandedCards {
    pub fn toggle(&mut self, position: usize) {
        if !self.expanded.remove(&position) {
            self.expanded.insert(position);
        }
    }

    pub fn is_expanded(&self, position: usize) -> bool {
        self.expanded.contains(&position)
    }

    pub fn count(&self) -> usize {
        self.expanded.len()
    }

    /// Collapse everything, used when a new list replaces the old one.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert_eq!(UiState::default(), UiState::Loading);
    }

    #[test]
    fn toggling_twice_collapses_again() {
        let mut cards = ExpandedCards::default();
        cards.toggle(1);
        assert!(cards.is_expanded(1));
        cards.toggle(1);
        assert!(!cards.is_expanded(1));
        assert_eq!(cards.count(), 0);
    }

    #[test]
    fn cards_toggle_independently() {
        let mut cards = ExpandedCards::default();
        cards.toggle(0);
        cards.toggle(2);
        cards.toggle(2);
        assert!(cards.is_expanded(0));
        assert!(!cards.is_expanded(1));
        assert!(!cards.is_expanded(2));
    }

    #[test]
    fn reset_collapses_all() {
        let mut cards = ExpandedCards::default();
        cards.toggle(0);
        cards.toggle(3);
        cards.reset();
        assert_eq!(cards, ExpandedCards::default());
    }
}
