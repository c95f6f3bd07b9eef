//! Filtering and pagination over the full vocabulary list.

use super::{LevelFilter, VocabularyItem};
use std::collections::HashSet;

pub const ITEMS_PER_PAGE: usize = 15;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeFilter {
    #[default]
    All,
    Only(String),
}

impl ThemeFilter {
    pub fn matches(&self, theme: &str) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Only(wanted) => wanted == theme,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ThemeFilter::All => "All Themes",
            ThemeFilter::Only(theme) => theme,
        }
    }
}

/// Browsing state of the vocabulary list. Pages are 1-based.
pub struct VocabularyView {
    items: Vec<VocabularyItem>,
    level: LevelFilter,
    theme: ThemeFilter,
    page: usize,
}

impl Default for VocabularyView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl VocabularyView {
    pub fn new(items: Vec<VocabularyItem>) -> Self {
        Self {
            items,
            level: LevelFilter::All,
            theme: ThemeFilter::All,
            page: 1,
        }
    }

    pub fn items_mut(&mut self) -> &mut [VocabularyItem] {
        &mut self.items
    }

    /// Sets the favorite flag of every loaded word from the stored favorite ids.
    pub fn mark_favorites(&mut self, favorite_ids: &HashSet<i64>) {
        for item in &mut self.items {
            item.is_favorite = Some(favorite_ids.contains(&item.id));
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn theme(&self) -> &ThemeFilter {
        &self.theme
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        if self.level != level {
            self.level = level;
            self.page = 1;
        }
    }

    pub fn set_theme(&mut self, theme: ThemeFilter) {
        if self.theme != theme {
            self.theme = theme;
            self.page = 1;
        }
    }

    /// Distinct themes of the loaded words, sorted.
    pub fn themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = self.items.iter().map(|i| i.theme.clone()).collect();
        themes.sort();
        themes.dedup();
        themes
    }

    pub fn filtered(&self) -> Vec<&VocabularyItem> {
        self.items
            .iter()
            .filter(|i| self.level.matches(i.level) && self.theme.matches(&i.theme))
            .collect()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(ITEMS_PER_PAGE)
    }

    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn page_items(&self) -> Vec<&VocabularyItem> {
        let start = (self.page - 1) * ITEMS_PER_PAGE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(ITEMS_PER_PAGE)
            .collect()
    }

    pub fn range_message(&self) -> String {
        let total = self.filtered().len();
        let start = (self.page - 1) * ITEMS_PER_PAGE;
        format!(
            "Showing {}-{} of {} words",
            (start + 1).min(total),
            (start + ITEMS_PER_PAGE).min(total),
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CefrLevel;

    fn view() -> VocabularyView {
        let items = (1..=40)
            .map(|id| {
                let level = if id <= 20 { CefrLevel::A1 } else { CefrLevel::B2 };
                let mut item = VocabularyItem::new(id, &format!("wort{id}"), &format!("word{id}"), level);
                item.theme = if id % 2 == 0 { "Food".to_string() } else { "Travel".to_string() };
                item
            })
            .collect();
        VocabularyView::new(items)
    }

    #[test]
    fn test_pagination() {
        let mut view = view();
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.page_items().len(), 15);
        assert_eq!(view.range_message(), "Showing 1-15 of 40 words");

        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.page(), 3);
        assert_eq!(view.page_items().len(), 10);
        assert_eq!(view.range_message(), "Showing 31-40 of 40 words");

        view.previous_page();
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_filters_reset_page() {
        let mut view = view();
        view.next_page();
        view.set_level(LevelFilter::Only(CefrLevel::A1));
        assert_eq!(view.page(), 1);
        assert_eq!(view.filtered().len(), 20);

        view.next_page();
        view.set_theme(ThemeFilter::Only("Food".to_string()));
        assert_eq!(view.page(), 1);
        assert_eq!(view.filtered().len(), 10);
        assert_eq!(view.page_count(), 1);
    }

    #[test]
    fn test_themes_are_distinct_and_sorted() {
        assert_eq!(view().themes(), vec!["Food".to_string(), "Travel".to_string()]);
    }

    #[test]
    fn test_mark_favorites() {
        let mut view = view();
        view.items_mut()[2].is_favorite = Some(true);
        view.mark_favorites(&HashSet::from([1, 40]));

        let starred: Vec<i64> = view
            .filtered()
            .into_iter()
            .filter(|i| i.is_favorite == Some(true))
            .map(|i| i.id)
            .collect();
        assert_eq!(starred, vec![1, 40]);
        assert!(view.filtered().iter().all(|i| i.is_favorite.is_some()));
    }

    #[test]
    fn test_empty_view() {
        let view = VocabularyView::new(Vec::new());
        assert_eq!(view.page_count(), 0);
        assert!(view.page_items().is_empty());
        assert_eq!(view.range_message(), "Showing 0-0 of 0 words");
    }
}
