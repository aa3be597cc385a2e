//! Search command - run the command palette filter headlessly

use std::path::Path;

use color_eyre::eyre::Result;
use companion_core::{CommandPalette, Config, SearchEntry};

use crate::load_config;

/// Entries the palette would list for `query`, in display order.
pub fn matches(config: &Config, query: &str) -> Vec<SearchEntry> {
    let mut palette = CommandPalette::new();
    palette.open(&config.navigation);
    palette.set_query(query);
    palette.results().to_vec()
}

/// Run the search command.
pub fn run(config_path: Option<&Path>, query: &str, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let results = matches(&config, query);
    tracing::info!(query, results = results.len(), "search");

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for \"{query}\"");
        return Ok(());
    }

    let width = results.iter().map(|e| e.id.len()).max().unwrap_or(0);
    for entry in &results {
        println!(
            "{} {:width$}  {}  ({})",
            entry.icon, entry.id, entry.label, entry.category
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(results: &[SearchEntry]) -> Vec<&str> {
        results.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let config = Config::builtin().unwrap();
        assert_eq!(matches(&config, "").len(), config.navigation.item_count());
    }

    #[test]
    fn test_category_match_keeps_declaration_order() {
        let config = Config::builtin().unwrap();
        assert_eq!(
            ids(&matches(&config, "COMPONENTS")),
            vec!["smart-presentational", "content-projection", "change-detection"]
        );
    }

    #[test]
    fn test_no_match() {
        let config = Config::builtin().unwrap();
        assert!(matches(&config, "kubernetes").is_empty());
    }

    #[test]
    fn test_run_json() {
        assert!(run(None, "signal", true).is_ok());
    }
}
