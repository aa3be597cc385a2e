//! Architect Companion CLI Library
//!
//! Developer tooling that runs the application's navigation, search,
//! highlighting and registry logic outside the browser.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, search, highlight, example)
//!
//! # Example
//!
//! ```no_run
//! use companion::cmd;
//!
//! // Validate the embedded configuration against the section set
//! cmd::check::run(None, false).unwrap();
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use companion_core::Config;

pub mod cmd;

// Re-export core types for convenience
pub use companion_core::{CommandPalette, ExampleRegistry, Section};

/// Load configuration from `path`, or the embedded one when `None`.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_with_env(path)
            .wrap_err_with(|| format!("loading configuration from {}", path.display())),
        None => Config::builtin().wrap_err("loading embedded configuration"),
    }
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// companion::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
