//! Sidebar navigation built from the navigation model.

use companion_core::{NavCategory, NavItem};
use leptos::prelude::*;

/// Sidebar listing every category and its items.
#[component]
pub fn Sidebar(
    /// Categories in display order.
    categories: Vec<NavCategory>,
    /// Currently active navigation id.
    active: Signal<String>,
    /// Called with the id of a clicked item.
    #[prop(into)]
    on_select: Callback<String>,
    /// Called when the search button is pressed.
    #[prop(into)]
    on_search: Callback<()>,
) -> impl IntoView {
    let groups = categories
        .into_iter()
        .map(|category| {
            let items = category
                .items
                .into_iter()
                .map(|item| view! { <SidebarLink item=item active=active on_select=on_select /> })
                .collect_view();

            view! {
              <div class="companion-nav-category">
                <h3 class="companion-nav-title">{category.title}</h3>
                <ul class="companion-nav-list">{items}</ul>
              </div>
            }
        })
        .collect_view();

    view! {
      <nav class="companion-nav" aria-label="Main navigation">
        <button class="companion-nav-search" on:click=move |_| on_search.run(())>
          <span>"Search..."</span>
          <kbd class="companion-nav-shortcut">"⌘K"</kbd>
        </button>
        {groups}
      </nav>
    }
}

#[component]
fn SidebarLink(item: NavItem, active: Signal<String>, on_select: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    let is_active = Memo::new(move |_| active.with(|current| *current == id));
    let click_id = item.id;

    view! {
      <li class="companion-nav-item" class:active=move || is_active.get()>
        <button
          class="companion-nav-link"
          aria-current=move || { if is_active.get() { Some("page") } else { None } }
          on:click=move |_| on_select.run(click_id.clone())
        >
          <span class="companion-nav-icon" aria-hidden="true">
            {item.icon}
          </span>
          {item.label}
        </button>
      </li>
    }
}
