//! Command palette components.
//!
//! [`SearchModal`] renders a [`CommandPalette`] held in a signal and forwards
//! input, keyboard and pointer events to it. [`SearchShortcut`] installs the
//! global Cmd/Ctrl+K listener for as long as it is mounted.

use companion_core::{
    CommandPalette, PaletteKey, SearchEntry, search::is_palette_shortcut,
};
use leptos::{leptos_dom::helpers::window_event_listener, prelude::*};

/// Search modal component with keyboard navigation.
#[component]
pub fn SearchModal(
    /// Palette state; open/closed lives here too.
    palette: RwSignal<CommandPalette>,
    /// Called with the chosen navigation id.
    #[prop(into)]
    on_select: Callback<String>,
    /// Placeholder text for the input.
    #[prop(default = "Search topics...".to_string())]
    placeholder: String,
) -> impl IntoView {
    let is_open = Memo::new(move |_| palette.with(|p| p.is_open()));
    let results = Memo::new(move |_| palette.with(|p| p.results().to_vec()));
    let selected = Memo::new(move |_| palette.with(|p| p.selected_index()));
    let query = Memo::new(move |_| palette.with(|p| p.query().to_string()));
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the query field whenever the palette opens
    Effect::new(move |_| {
        if is_open.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = PaletteKey::from_key(&ev.key());
        let Some(outcome) = palette.try_update(|p| p.handle_key(key)) else {
            return;
        };
        if outcome.prevent_default {
            ev.prevent_default();
        }
        if let Some(id) = outcome.chosen {
            on_select.run(id);
        }
    };

    let on_overlay_click = move |_| {
        palette.update(|p| p.close());
    };

    // Prevent closing when clicking modal content
    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
      <Show when=move || is_open.get()>
        <div class="companion-modal-overlay" on:click=on_overlay_click>
          <div
            class="companion-modal-content"
            role="dialog"
            aria-label="Search"
            on:click=on_content_click
          >
            <div class="companion-modal-header">
              <input
                node_ref=input_ref
                type="text"
                class="companion-search-input"
                placeholder=placeholder.clone()
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| {
                  let value = event_target_value(&ev);
                  palette.update(|p| p.set_query(value));
                }
                on:keydown=on_keydown
              />
            </div>
            <div class="companion-modal-body">
              <Show
                when=move || !results.get().is_empty()
                fallback=move || {
                  view! {
                    <div class="companion-search-no-results">
                      "No results found for \"" {move || query.get()} "\""
                    </div>
                  }
                }
              >
                <ul class="companion-search-list" role="listbox">
                  <For
                    each=move || results.get().into_iter().enumerate()
                    key=|(index, entry)| (*index, entry.id.clone())
                    children=move |(index, entry)| {
                      view! {
                        <SearchResultRow
                          index=index
                          entry=entry
                          selected=selected
                          palette=palette
                          on_select=on_select
                        />
                      }
                    }
                  />
                </ul>
              </Show>
            </div>
            <div class="companion-modal-footer">
              <span class="companion-modal-hint">
                <kbd>"↑"</kbd>
                <kbd>"↓"</kbd>
                " to navigate"
              </span>
              <span class="companion-modal-hint">
                <kbd>"↵"</kbd>
                " to select"
              </span>
              <span class="companion-modal-hint">
                <kbd>"esc"</kbd>
                " to close"
              </span>
            </div>
          </div>
        </div>
      </Show>
    }
}

/// One result row; hovering moves the shared selection, clicking confirms.
#[component]
fn SearchResultRow(
    index: usize,
    entry: SearchEntry,
    selected: Memo<Option<usize>>,
    palette: RwSignal<CommandPalette>,
    on_select: Callback<String>,
) -> impl IntoView {
    let is_selected = Memo::new(move |_| selected.get() == Some(index));

    let on_click = move |_| {
        if let Some(id) = palette.try_update(|p| p.choose(index)).flatten() {
            on_select.run(id);
        }
    };

    view! {
      <li
        class="companion-search-item"
        class:selected=move || is_selected.get()
        role="option"
        aria-selected=move || is_selected.get().to_string()
        on:mouseenter=move |_| palette.update(|p| p.hover(index))
        on:click=on_click
      >
        <span class="companion-search-icon" aria-hidden="true">
          {entry.icon}
        </span>
        <span class="companion-search-label">{entry.label}</span>
        <span class="companion-search-category">{entry.category}</span>
      </li>
    }
}

/// Global keyboard shortcut that opens the palette.
///
/// Registers one window `keydown` listener when mounted and removes it on
/// cleanup, so remounting the shell never stacks handlers.
#[component]
#[allow(clippy::unused_unit)]
pub fn SearchShortcut(
    /// Called when Cmd/Ctrl + `key` is pressed.
    #[prop(into)]
    on_open: Callback<()>,
    /// Shortcut key, combined with Ctrl or Cmd.
    #[prop(default = "k".to_string())]
    key: String,
) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_palette_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key(), &key) {
            ev.prevent_default();
            on_open.run(());
        }
    });

    on_cleanup(move || {
        log::debug!("removing search shortcut listener");
        handle.remove();
    });
}
