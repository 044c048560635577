use crate::category::CategoryId;

/// Which category the catalog page is currently showing.
///
/// Any category can follow any other; there are no guards and no final state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategorySelector {
    active: CategoryId,
}

impl CategorySelector {
    /// Starts on "all".
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts on `category`, e.g. when arriving from a footer link.
    pub fn preset(category: CategoryId) -> Self {
        Self { active: category }
    }

    pub fn active(&self) -> CategoryId {
        self.active
    }

    pub fn is_active(&self, category: CategoryId) -> bool {
        self.active == category
    }

    /// Makes `category` the active one. Returns the previously active category.
    pub fn select(&mut self, category: CategoryId) -> CategoryId {
        std::mem::replace(&mut self.active, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn starts_on_all() {
        assert_eq!(CategorySelector::new().active(), CategoryId::All);
    }

    #[test]
    fn preset_only_changes_the_start() {
        let mut selector = CategorySelector::preset(CategoryId::Organic);
        assert!(selector.is_active(CategoryId::Organic));
        assert_eq!(selector.select(CategoryId::Blends), CategoryId::Organic);
        assert_eq!(selector.active(), CategoryId::Blends);
    }

    #[test]
    fn last_selection_wins_regardless_of_history() {
        let histories: [&[CategoryId]; 3] = [
            &[CategoryId::Blends],
            &[CategoryId::Organic, CategoryId::All, CategoryId::Blends],
            &[CategoryId::Blends, CategoryId::Blends, CategoryId::Blends],
        ];
        for history in histories {
            let mut selector = CategorySelector::new();
            for &category in history {
                selector.select(category);
            }
            assert_eq!(selector.active(), CategoryId::Blends);
        }
    }

    #[test]
    fn every_transition_is_allowed() {
        for from in CategoryId::iter() {
            for to in CategoryId::iter() {
                let mut selector = CategorySelector::preset(from);
                selector.select(to);
                assert!(selector.is_active(to));
            }
        }
    }
}
