//! Architect Companion CLI
//!
//! Developer tooling for the Architect Companion content: validates the
//! navigation against the section set and runs search, highlighting and
//! example lookup outside the browser.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Architect Companion.
#[derive(Parser)]
#[command(
    name = "companion",
    version,
    about = "Developer tooling for Architect Companion"
)]
struct Cli {
    /// Path to a configuration file (defaults to the embedded one)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate configuration, navigation and examples
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List the palette results for a query
    Search {
        /// Query text (empty lists everything)
        #[arg(default_value = "")]
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print highlighted HTML for a source file
    Highlight {
        /// File to highlight, or `-` for stdin
        path: PathBuf,
        /// Wrap the output in <pre><code>
        #[arg(long)]
        wrap: bool,
    },
    /// Print an example from the registry
    Example {
        /// Registry id, e.g. state/cart.service.ts
        id: Option<String>,
        /// List all registered ids
        #[arg(short, long)]
        list: bool,
        /// Print highlighted HTML instead of source
        #[arg(long)]
        highlight: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    companion::init_tracing(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Check { strict } => {
            companion::cmd::check::run(config, strict)?;
        }
        Commands::Search { query, json } => {
            companion::cmd::search::run(config, &query, json)?;
        }
        Commands::Highlight { path, wrap } => {
            companion::cmd::highlight::run(&path, wrap)?;
        }
        Commands::Example {
            id,
            list,
            highlight,
        } => {
            companion::cmd::example::run(id.as_deref(), list, highlight)?;
        }
    }

    Ok(())
}
