//! Navigation model: ordered categories of navigable items.
//!
//! The model drives both the sidebar and the command palette. Declaration
//! order is significant, and every item id must be unique across the whole
//! model because it doubles as the content lookup key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A single navigable item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    /// Stable identifier, used as the section lookup key.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Presentational glyph shown next to the label.
    #[serde(default)]
    pub icon: String,
}

impl NavItem {
    /// Create a new navigation item.
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// A titled group of navigation items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavCategory {
    /// Category heading.
    pub title: String,

    /// Items in declaration order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavCategory {
    /// Create a new category.
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// A navigation item paired with the title of the category that owns it.
///
/// Only produced while searching; see [`NavigationModel::flatten`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEntry {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub category: String,
}

impl SearchEntry {
    /// Whether the label or the category title contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// The full navigation taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NavigationModel {
    categories: Vec<NavCategory>,
}

impl NavigationModel {
    /// Build a model, rejecting duplicate ids.
    pub fn new(categories: Vec<NavCategory>) -> Result<Self> {
        let model = Self { categories };
        model.validate()?;
        Ok(model)
    }

    /// Check that every item id is non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for category in &self.categories {
            if category.title.trim().is_empty() {
                return Err(CoreError::config("navigation category title cannot be empty"));
            }

            for item in &category.items {
                if item.id.trim().is_empty() {
                    return Err(CoreError::config(format!(
                        "navigation item '{}' in '{}' has an empty id",
                        item.label, category.title
                    )));
                }

                if let Some(first) = seen.insert(&item.id, &category.title) {
                    return Err(CoreError::duplicate_id(&item.id, first, &category.title));
                }
            }
        }

        Ok(())
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[NavCategory] {
        &self.categories
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Iterate over every item in category-then-item order.
    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Look up an item by id.
    pub fn find(&self, id: &str) -> Option<&NavItem> {
        self.items().find(|item| item.id == id)
    }

    /// Whether an item with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Flatten into search entries, keeping declaration order.
    pub fn flatten(&self) -> Vec<SearchEntry> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.items.iter().map(move |item| SearchEntry {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    icon: item.icon.clone(),
                    category: category.title.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The two-category model used throughout the search tests.
    pub(crate) fn sample_model() -> NavigationModel {
        NavigationModel::new(vec![
            NavCategory::new(
                "A",
                vec![NavItem::new("x", "x", "*"), NavItem::new("y", "y", "*")],
            ),
            NavCategory::new("B", vec![NavItem::new("z", "z", "*")]),
        ])
        .expect("valid model")
    }

    #[test]
    fn test_flatten_preserves_order() {
        let entries = sample_model().flatten();
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
        assert_eq!(entries[1].category, "A");
        assert_eq!(entries[2].category, "B");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = NavigationModel::new(vec![
            NavCategory::new("First", vec![NavItem::new("dup", "One", "")]),
            NavCategory::new("Second", vec![NavItem::new("dup", "Two", "")]),
        ]);

        match result {
            Err(CoreError::DuplicateId { id, first, second }) => {
                assert_eq!(id, "dup");
                assert_eq!(first, "First");
                assert_eq!(second, "Second");
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let result =
            NavigationModel::new(vec![NavCategory::new("A", vec![NavItem::new(" ", "Blank", "")])]);
        assert!(result.unwrap_err().to_string().contains("empty id"));
    }

    #[test]
    fn test_find_and_contains() {
        let model = sample_model();
        assert_eq!(model.find("y").map(|i| i.label.as_str()), Some("y"));
        assert!(model.contains("z"));
        assert!(!model.contains("missing"));
        assert_eq!(model.item_count(), 3);
    }

    #[test]
    fn test_entry_matches_category_title() {
        let entry = SearchEntry {
            id: "di".to_string(),
            label: "Injection Tokens".to_string(),
            icon: String::new(),
            category: "Dependency Injection".to_string(),
        };
        assert!(entry.matches_lowercase("tokens"));
        assert!(entry.matches_lowercase("dependency"));
        assert!(!entry.matches_lowercase("routing"));
    }

    fn arb_model() -> impl Strategy<Value = NavigationModel> {
        prop::collection::vec(("[A-Z][a-z]{0,6}", 0usize..5), 0..6).prop_map(|specs| {
            let categories = specs
                .into_iter()
                .enumerate()
                .map(|(ci, (title, n))| {
                    let items = (0..n)
                        .map(|ii| NavItem::new(format!("c{ci}-i{ii}"), format!("Item {ii}"), ""))
                        .collect();
                    NavCategory::new(title, items)
                })
                .collect();
            NavigationModel::new(categories).expect("generated ids are unique")
        })
    }

    proptest! {
        #[test]
        fn test_flatten_length_and_order(model in arb_model()) {
            let entries = model.flatten();
            let expected: Vec<_> = model.items().map(|i| i.id.clone()).collect();
            prop_assert_eq!(entries.len(), model.item_count());
            prop_assert_eq!(entries.into_iter().map(|e| e.id).collect::<Vec<_>>(), expected);
        }
    }
}
