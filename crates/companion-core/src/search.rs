//! Command palette state.
//!
//! The palette flattens the navigation model once per open, filters it on
//! every query change and keeps a selection index that keyboard and pointer
//! input share. The Leptos view in `companion-ui` owns one of these inside a
//! signal and forwards DOM events to it.

use serde::{Deserialize, Serialize};

use crate::navigation::{NavigationModel, SearchEntry};

/// Direction for [`CommandPalette::move_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Keys the palette intercepts while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    /// Anything else flows into the query field untouched.
    Other,
}

impl PaletteKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// What the view should do after a key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the browser's default handling of the key.
    pub prevent_default: bool,

    /// Section id chosen by this key press, if any.
    pub chosen: Option<String>,
}

/// Live query and selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub selected: usize,
}

/// Whether a key press is the global "open palette" shortcut.
///
/// Either Ctrl or Meta (Cmd on macOS) counts as the primary modifier.
pub fn is_palette_shortcut(key: &str, ctrl: bool, meta: bool, shortcut: &str) -> bool {
    (ctrl || meta) && !shortcut.is_empty() && key.eq_ignore_ascii_case(shortcut)
}

/// Ordered subsequence of `entries` whose label or category title contains
/// `query`, ignoring case. An empty query keeps everything.
pub fn filter_entries(entries: &[SearchEntry], query: &str) -> Vec<SearchEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Command palette state machine.
#[derive(Debug, Clone, Default)]
pub struct CommandPalette {
    open: bool,
    entries: Vec<SearchEntry>,
    results: Vec<SearchEntry>,
    filter: FilterState,
}

impl CommandPalette {
    /// Create a closed, empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the palette and start a fresh session.
    ///
    /// Any query or selection left over from a previous session is dropped.
    pub fn open(&mut self, model: &NavigationModel) {
        self.entries = model.flatten();
        self.filter = FilterState::default();
        self.open = true;
        self.recompute();
        tracing::debug!(entries = self.entries.len(), "command palette opened");
    }

    /// Hide the palette. Filter state is left alone until the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.filter.query
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Flattened entries for the current session.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Entries matching the current query, in declaration order.
    pub fn results(&self) -> &[SearchEntry] {
        &self.results
    }

    /// Update the query, refilter and move the selection back to the top.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.query = text.into();
        self.filter.selected = 0;
        self.recompute();
    }

    /// Refilter the flattened entries against the current query.
    pub fn recompute(&mut self) {
        self.results = filter_entries(&self.entries, &self.filter.query);
        self.clamp_selection();
    }

    /// Selected index, or `None` when there are no results.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.results.is_empty()).then_some(self.filter.selected)
    }

    pub fn selected_entry(&self) -> Option<&SearchEntry> {
        self.selected_index().and_then(|i| self.results.get(i))
    }

    /// Step the selection by one, stopping at either end.
    pub fn move_selection(&mut self, direction: Direction) {
        if self.results.is_empty() {
            return;
        }

        self.filter.selected = match direction {
            Direction::Up => self.filter.selected.saturating_sub(1),
            Direction::Down => self.filter.selected.saturating_add(1),
        };
        self.clamp_selection();
    }

    /// Point the selection at a result under the pointer.
    pub fn hover(&mut self, index: usize) {
        if self.results.is_empty() {
            return;
        }
        self.filter.selected = index;
        self.clamp_selection();
    }

    /// Take the selected entry's id and close.
    ///
    /// Returns `None` and stays open when nothing is selected.
    pub fn confirm(&mut self) -> Option<String> {
        let id = self.selected_entry()?.id.clone();
        tracing::debug!(%id, query = %self.filter.query, "command palette selection");
        self.close();
        Some(id)
    }

    /// Select a result by index and confirm it (pointer click).
    pub fn choose(&mut self, index: usize) -> Option<String> {
        if index >= self.results.len() {
            return None;
        }
        self.filter.selected = index;
        self.confirm()
    }

    /// Apply the palette keyboard contract.
    pub fn handle_key(&mut self, key: PaletteKey) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::default();
        }

        match key {
            PaletteKey::ArrowDown => {
                self.move_selection(Direction::Down);
                KeyOutcome {
                    prevent_default: true,
                    chosen: None,
                }
            }
            PaletteKey::ArrowUp => {
                self.move_selection(Direction::Up);
                KeyOutcome {
                    prevent_default: true,
                    chosen: None,
                }
            }
            PaletteKey::Enter => KeyOutcome {
                prevent_default: true,
                chosen: self.confirm(),
            },
            PaletteKey::Escape => {
                self.close();
                KeyOutcome::default()
            }
            PaletteKey::Other => KeyOutcome::default(),
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.results.len().saturating_sub(1);
        self.filter.selected = self.filter.selected.min(last);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::navigation::{NavCategory, NavItem, tests::sample_model};

    fn opened() -> CommandPalette {
        let mut palette = CommandPalette::new();
        palette.open(&sample_model());
        palette
    }

    fn result_ids(palette: &CommandPalette) -> Vec<&str> {
        palette.results().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_palette_state_serialization() {
        let mut palette = opened();
        palette.move_selection(Direction::Down);

        let entry = palette.selected_entry().cloned().expect("selection");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"id\":\"y\""));
        assert!(json.contains(&format!("\"category\":\"{}\"", entry.category)));
        let back: SearchEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);

        let json = serde_json::to_string(palette.filter_state()).unwrap();
        assert_eq!(json, r#"{"query":"","selected":1}"#);
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, palette.filter_state());
    }

    #[test]
    fn test_open_lists_everything() {
        let palette = opened();
        assert!(palette.is_open());
        assert_eq!(result_ids(&palette), vec!["x", "y", "z"]);
        assert_eq!(palette.selected_index(), Some(0));
    }

    #[test]
    fn test_query_filters_and_resets_selection() {
        let mut palette = opened();
        palette.move_selection(Direction::Down);
        palette.move_selection(Direction::Down);
        assert_eq!(palette.selected_index(), Some(2));

        palette.set_query("y");
        assert_eq!(result_ids(&palette), vec!["y"]);
        assert_eq!(palette.selected_index(), Some(0));
    }

    #[test]
    fn test_query_matches_category_title() {
        let mut palette = opened();
        palette.set_query("b");
        assert_eq!(result_ids(&palette), vec!["z"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let model = NavigationModel::new(vec![NavCategory::new(
            "State Management",
            vec![
                NavItem::new("signals", "Signals", ""),
                NavItem::new("store", "Global Store", ""),
            ],
        )])
        .unwrap();
        let mut palette = CommandPalette::new();
        palette.open(&model);

        palette.set_query("SIGNAL");
        assert_eq!(result_ids(&palette), vec!["signals"]);

        palette.set_query("management");
        assert_eq!(result_ids(&palette), vec!["signals", "store"]);
    }

    #[test]
    fn test_arrow_down_clamps_single_result() {
        let mut palette = opened();
        palette.set_query("y");
        let outcome = palette.handle_key(PaletteKey::ArrowDown);
        assert!(outcome.prevent_default);
        assert_eq!(palette.selected_index(), Some(0));
    }

    #[test]
    fn test_arrow_up_stops_at_top() {
        let mut palette = opened();
        palette.handle_key(PaletteKey::ArrowUp);
        assert_eq!(palette.selected_index(), Some(0));
    }

    #[test]
    fn test_arrow_down_stops_at_bottom() {
        let mut palette = opened();
        for _ in 0..10 {
            palette.handle_key(PaletteKey::ArrowDown);
        }
        assert_eq!(palette.selected_index(), Some(2));
    }

    #[test]
    fn test_empty_results_have_no_selection() {
        let mut palette = opened();
        palette.set_query("nothing matches this");
        assert!(palette.results().is_empty());
        assert_eq!(palette.selected_index(), None);

        palette.move_selection(Direction::Down);
        assert_eq!(palette.selected_index(), None);

        let outcome = palette.handle_key(PaletteKey::Enter);
        assert!(outcome.chosen.is_none());
        assert!(palette.is_open());
    }

    #[test]
    fn test_enter_confirms_and_closes() {
        let mut palette = opened();
        palette.handle_key(PaletteKey::ArrowDown);
        let outcome = palette.handle_key(PaletteKey::Enter);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.chosen.as_deref(), Some("y"));
        assert!(!palette.is_open());
    }

    #[test]
    fn test_escape_closes_without_reset() {
        let mut palette = opened();
        palette.set_query("z");
        let outcome = palette.handle_key(PaletteKey::Escape);
        assert!(!outcome.prevent_default);
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "z");
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut palette = opened();
        assert_eq!(palette.handle_key(PaletteKey::Other), KeyOutcome::default());
        assert!(palette.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut palette = CommandPalette::new();
        assert_eq!(palette.handle_key(PaletteKey::Enter), KeyOutcome::default());
    }

    #[test]
    fn test_reopen_resets_filter_state() {
        let model = sample_model();
        let mut palette = CommandPalette::new();
        palette.open(&model);
        palette.set_query("z");
        palette.open(&model);
        assert_eq!(palette.filter_state(), &FilterState::default());
        assert_eq!(palette.results().len(), 3);

        palette.set_query("y");
        palette.close();
        palette.open(&model);
        assert_eq!(palette.query(), "");
        assert_eq!(palette.selected_index(), Some(0));
    }

    #[test]
    fn test_hover_and_choose() {
        let mut palette = opened();
        palette.hover(2);
        assert_eq!(palette.selected_entry().map(|e| e.id.as_str()), Some("z"));

        palette.hover(99);
        assert_eq!(palette.selected_index(), Some(2));

        assert_eq!(palette.choose(99), None);
        assert!(palette.is_open());

        assert_eq!(palette.choose(0).as_deref(), Some("x"));
        assert!(!palette.is_open());
    }

    #[test]
    fn test_palette_key_mapping() {
        assert_eq!(PaletteKey::from_key("ArrowDown"), PaletteKey::ArrowDown);
        assert_eq!(PaletteKey::from_key("ArrowUp"), PaletteKey::ArrowUp);
        assert_eq!(PaletteKey::from_key("Enter"), PaletteKey::Enter);
        assert_eq!(PaletteKey::from_key("Escape"), PaletteKey::Escape);
        assert_eq!(PaletteKey::from_key("a"), PaletteKey::Other);
    }

    #[test]
    fn test_palette_shortcut() {
        assert!(is_palette_shortcut("k", true, false, "k"));
        assert!(is_palette_shortcut("K", false, true, "k"));
        assert!(!is_palette_shortcut("k", false, false, "k"));
        assert!(!is_palette_shortcut("j", true, false, "k"));
        assert!(!is_palette_shortcut("k", true, false, ""));
    }

    fn arb_entries() -> impl Strategy<Value = Vec<SearchEntry>> {
        prop::collection::vec(("[a-zA-Z ]{0,8}", "[a-zA-Z]{0,5}"), 0..12).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (label, category))| SearchEntry {
                    id: format!("e{i}"),
                    label,
                    icon: String::new(),
                    category,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_filter_iff_substring(entries in arb_entries(), query in "[a-zA-Z]{0,3}") {
            let results = filter_entries(&entries, &query);
            let needle = query.to_lowercase();
            let expected: Vec<_> = entries
                .iter()
                .filter(|e| {
                    e.label.to_lowercase().contains(&needle)
                        || e.category.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            prop_assert_eq!(results, expected);
        }

        #[test]
        fn test_empty_query_keeps_all(entries in arb_entries()) {
            prop_assert_eq!(filter_entries(&entries, ""), entries);
        }

        #[test]
        fn test_selection_always_in_range(
            query in "[xyzab]{0,1}",
            moves in prop::collection::vec(any::<bool>(), 0..20),
        ) {
            let mut palette = opened();
            palette.set_query(query);
            for down in moves {
                palette.move_selection(if down { Direction::Down } else { Direction::Up });
                match palette.selected_index() {
                    Some(i) => prop_assert!(i < palette.results().len()),
                    None => prop_assert!(palette.results().is_empty()),
                }
            }
        }
    }
}
