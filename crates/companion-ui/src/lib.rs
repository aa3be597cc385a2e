//! Architect Companion UI Components
//!
//! Leptos components for the Architect Companion frontend.
//!
//! # Components
//!
//! ## Search
//! - [`SearchModal`] - Command palette over the navigation model
//! - [`SearchShortcut`] - Global Cmd/Ctrl+K listener, removed on unmount
//!
//! ## Code
//! - [`CodeBlock`] - Highlighted source with a copy button
//! - [`Example`] - Code block for an example registry entry
//!
//! ## Navigation
//! - [`Sidebar`] - Category and item list with active highlighting
//!
//! ## Article
//! - [`ArticleHeader`], [`Note`], [`Prose`] - Section building blocks
//!
//! # Example
//!
//! ```ignore
//! use companion_core::{CommandPalette, Config};
//! use companion_ui::{SearchModal, SearchShortcut};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Shell(config: Config) -> impl IntoView {
//!     let palette = RwSignal::new(CommandPalette::new());
//!     let nav = StoredValue::new(config.navigation);
//!     let open = move |_| nav.with_value(|n| palette.update(|p| p.open(n)));
//!
//!     view! {
//!         <SearchShortcut on_open=open />
//!         <SearchModal palette=palette on_select=|id: String| log::info!("{id}") />
//!     }
//! }
//! ```

pub mod article;
pub mod code;
pub mod navigation;
pub mod search;

pub use article::{ArticleHeader, Note, NoteKind, Prose};
pub use code::{CodeBlock, Example, write_clipboard};
pub use navigation::Sidebar;
pub use search::{SearchModal, SearchShortcut};
