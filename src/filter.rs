//! Filter Engine
//!
//! Pure derivations over the fetched collection: the filtered subset for the
//! current criteria and the category vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{FilterCriteria, TimelineItem};

/// Which fields the free-text query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// `CreateDate` prefix only
    DatePrefix,
    /// `CreateDate` prefix, or `Category` substring
    #[default]
    DateOrCategory,
}

/// Keep items matching `criteria`, preserving source order.
pub fn compute_filtered(
    items: &[TimelineItem],
    criteria: &FilterCriteria,
    mode: SearchMode,
) -> Vec<TimelineItem> {
    let query = criteria.search_query.trim().to_lowercase();

    items
        .iter()
        .filter(|item| query.is_empty() || matches_query(item, &query, mode))
        .filter(|item| match &criteria.selected_category {
            Some(category) => item.category == *category,
            None => true,
        })
        .cloned()
        .collect()
}

/// `query` must already be trimmed and lowercased
fn matches_query(item: &TimelineItem, query: &str, mode: SearchMode) -> bool {
    if item.create_date.to_lowercase().starts_with(query) {
        return true;
    }
    match mode {
        SearchMode::DatePrefix => false,
        SearchMode::DateOrCategory => item.category.to_lowercase().contains(query),
    }
}

/// Distinct categories, sorted.
pub fn compute_categories(items: &[TimelineItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use pretty_assertions::assert_eq;

    fn make_item(id: i64, date: &str, category: &str) -> TimelineItem {
        TimelineItem {
            id: ItemId::Number(id),
            title: Some(format!("Item {}", id)),
            description: None,
            create_date: date.to_string(),
            category: category.to_string(),
            image: None,
            icon: None,
            audio: None,
        }
    }

    fn sample() -> Vec<TimelineItem> {
        vec![
            make_item(1, "07 Jul 2020", "Podcast"),
            make_item(2, "08 Jul 2020", "News"),
            make_item(3, "07 Aug 2020", "podcast extra"),
            make_item(4, "12 Jan 2021", "News"),
            make_item(5, "07 Jul 2021", "Music"),
        ]
    }

    fn ids(items: &[TimelineItem]) -> Vec<ItemId> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let items = sample();
        let filtered = compute_filtered(&items, &FilterCriteria::default(), SearchMode::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_whitespace_query_is_no_filter() {
        let items = sample();
        let criteria = FilterCriteria::new("   ", None);
        assert_eq!(compute_filtered(&items, &criteria, SearchMode::DateOrCategory).len(), 5);
    }

    #[test]
    fn test_date_prefix_is_case_insensitive_and_trimmed() {
        let items = sample();
        let criteria = FilterCriteria::new("  07 JUL ", None);
        let filtered = compute_filtered(&items, &criteria, SearchMode::DatePrefix);
        assert_eq!(ids(&filtered), vec![ItemId::Number(1), ItemId::Number(5)]);
    }

    #[test]
    fn test_date_match_is_prefix_not_substring() {
        let items = sample();
        let criteria = FilterCriteria::new("Jul", None);
        assert!(compute_filtered(&items, &criteria, SearchMode::DatePrefix).is_empty());
    }

    #[test]
    fn test_category_substring_in_richer_mode() {
        let items = sample();
        let criteria = FilterCriteria::new("PODCAST", None);

        let rich = compute_filtered(&items, &criteria, SearchMode::DateOrCategory);
        assert_eq!(ids(&rich), vec![ItemId::Number(1), ItemId::Number(3)]);

        let date_only = compute_filtered(&items, &criteria, SearchMode::DatePrefix);
        assert!(date_only.is_empty());
    }

    #[test]
    fn test_selected_category_is_exact_and_case_sensitive() {
        let items = sample();
        let criteria = FilterCriteria::new("", Some("News".to_string()));
        let filtered = compute_filtered(&items, &criteria, SearchMode::default());
        assert_eq!(ids(&filtered), vec![ItemId::Number(2), ItemId::Number(4)]);

        let lower = FilterCriteria::new("", Some("news".to_string()));
        assert!(compute_filtered(&items, &lower, SearchMode::default()).is_empty());
    }

    #[test]
    fn test_query_and_category_combine() {
        let items = sample();
        let criteria = FilterCriteria::new("07", Some("Podcast".to_string()));
        let filtered = compute_filtered(&items, &criteria, SearchMode::default());
        assert_eq!(ids(&filtered), vec![ItemId::Number(1)]);
    }

    #[test]
    fn test_filtered_is_ordered_subsequence() {
        let items = sample();
        let criteria = FilterCriteria::new("0", None);
        let filtered = compute_filtered(&items, &criteria, SearchMode::default());

        let mut source = items.iter();
        for kept in &filtered {
            assert!(source.any(|item| item == kept), "{:?} out of order", kept.id);
        }
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let categories = compute_categories(&sample());
        assert_eq!(categories, vec!["Music", "News", "Podcast", "podcast extra"]);
    }

    #[test]
    fn test_categories_of_empty_collection() {
        assert!(compute_categories(&[]).is_empty());
    }
}
