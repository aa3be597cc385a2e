//! Check command - validate configuration, navigation and examples

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Result, bail};
use companion_core::{Config, ExampleRegistry, Section};

use crate::load_config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, its navigation against the section set and
/// every example referenced by a section.
pub fn run(config_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match load_config(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid: {e:#}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking navigation...");
        check_navigation(cfg, &mut result);
    }

    println!("\nChecking examples...");
    check_examples(&ExampleRegistry::builtin(), &mut result);

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Cross-check navigation ids against the section set.
pub fn check_navigation(config: &Config, result: &mut ValidationResult) {
    let before = result.errors.len();

    for item in config.navigation.items() {
        if Section::from_id(&item.id).is_none() {
            result.add_error(format!(
                "Navigation id '{}' ({}) has no content section and would render '{}'",
                item.id,
                item.label,
                Section::DEFAULT
            ));
        }
        if item.icon.is_empty() {
            result.add_warning(format!("Navigation item '{}' has no icon", item.id));
        }
    }

    // Unknown ids always fall back to Section::DEFAULT, not to the configured start page.
    let start = Section::resolve(&config.site.default_section);
    if start != Section::DEFAULT {
        result.add_warning(format!(
            "site.default_section '{start}' differs from the fallback section '{}' used for unknown ids",
            Section::DEFAULT
        ));
    }

    for section in Section::ALL {
        if !config.navigation.contains(section.id()) {
            result.add_warning(format!(
                "Section '{section}' is not reachable from navigation or search"
            ));
        }
    }

    if result.errors.len() == before {
        println!(
            "  ✓ {} navigation items across {} categories",
            config.navigation.item_count(),
            config.navigation.categories().len()
        );
    } else {
        println!("  ✗ {} navigation id(s) without a section", result.errors.len() - before);
    }
}

/// Check that every example a section shows exists in the registry.
pub fn check_examples(registry: &ExampleRegistry, result: &mut ValidationResult) {
    let mut referenced = HashSet::new();
    let mut missing = 0;

    for section in Section::ALL {
        for &id in section.examples() {
            referenced.insert(id);
            if !registry.contains(id) {
                result.add_error(format!("Section '{section}' references missing example '{id}'"));
                missing += 1;
            }
        }
    }

    for id in registry.ids() {
        if !referenced.contains(id) {
            result.add_warning(format!("Example '{id}' is not shown by any section"));
        }
    }

    if missing == 0 {
        println!("  ✓ All {} referenced examples present", referenced.len());
    } else {
        println!("  ✗ {missing}/{} referenced examples missing", referenced.len());
    }
}
