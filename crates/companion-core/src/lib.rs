//! Architect Companion Core Library
//!
//! Navigation model, command palette state, content sections, the example
//! registry and configuration for the Architect Companion reference app.
//! Nothing here touches the DOM; the Leptos components in `companion-ui`
//! and `app` drive these types from browser events.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod navigation;
pub mod registry;
pub mod search;
pub mod section;

pub use clipboard::CopyFeedback;
pub use config::Config;
pub use error::{CoreError, Result};
pub use navigation::{NavCategory, NavItem, NavigationModel, SearchEntry};
pub use registry::{ExampleRegistry, get_example};
pub use search::{CommandPalette, Direction, FilterState, KeyOutcome, PaletteKey};
pub use section::Section;
