//! Consistency checks between the shipped configuration, the section set
//! and the example registry.

use companion_core::{CommandPalette, Config, ExampleRegistry, PaletteKey, Section};

fn builtin() -> Config {
    Config::builtin().expect("builtin configuration should load")
}

#[test]
fn test_every_navigation_id_has_a_section() {
    let config = builtin();
    for item in config.navigation.items() {
        assert!(
            Section::from_id(&item.id).is_some(),
            "navigation id '{}' has no section",
            item.id
        );
    }
}

#[test]
fn test_every_section_is_reachable() {
    let config = builtin();
    for section in Section::ALL {
        assert!(
            config.navigation.contains(section.id()),
            "section '{section}' is missing from navigation"
        );
    }
}

#[test]
fn test_every_referenced_example_exists() {
    let registry = ExampleRegistry::builtin();
    for section in Section::ALL {
        for id in section.examples() {
            assert!(registry.contains(id), "{section} references missing example {id}");
        }
    }
}

#[test]
fn test_default_section_matches_config() {
    let config = builtin();
    assert_eq!(Section::resolve(&config.site.default_section), Section::DEFAULT);
}

#[test]
fn test_palette_over_builtin_navigation() {
    let config = builtin();
    let mut palette = CommandPalette::new();
    palette.open(&config.navigation);
    assert_eq!(palette.results().len(), config.navigation.item_count());

    palette.set_query("state");
    let ids: Vec<_> = palette.results().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["service-state", "signals", "store-pattern"]);

    palette.handle_key(PaletteKey::ArrowDown);
    let outcome = palette.handle_key(PaletteKey::Enter);
    assert_eq!(outcome.chosen.as_deref(), Some("signals"));
    assert_eq!(Section::resolve("signals"), Section::Signals);
}
