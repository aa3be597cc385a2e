use companion_core::{CommandPalette, Config, Section};
use companion_ui::{SearchModal, SearchShortcut, Sidebar};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

pub mod sections;

/// Application shell: sidebar, active section and command palette.
#[component]
pub fn App(
    /// Validated application configuration.
    config: Config,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(config.code.clone());

    let site_title = config.site.title.clone();
    let tagline = config.site.tagline.clone();
    let placeholder = config.palette.placeholder.clone();
    let shortcut = config.palette.shortcut.clone();
    let categories = config.navigation.categories().to_vec();

    let active = RwSignal::new(config.site.default_section.clone());
    let palette = RwSignal::new(CommandPalette::new());
    let config = StoredValue::new(config);

    let section = Memo::new(move |_| active.with(|id| Section::resolve(id)));

    let document_title = Memo::new(move |_| {
        active.with(|id| {
            config.with_value(|c| match c.label_for(id) {
                Some(label) => format!("{label} · {}", c.site.title),
                None => c.site.title.clone(),
            })
        })
    });

    let open_search = move || {
        config.with_value(|c| palette.update(|p| p.open(&c.navigation)));
    };

    // Any id is accepted; unknown ids render the default section.
    let set_active_section = move |id: String| {
        log::debug!("active section -> {id}");
        active.set(id);
        palette.update(|p| p.close());
    };

    view! {
      <Title text=move || document_title.get() />
      <SearchShortcut on_open=move |_| open_search() key=shortcut />

      <div class="companion-layout">
        <aside class="companion-sidebar">
          <div class="companion-brand">
            <h1 class="companion-brand-title">{site_title}</h1>
            {tagline.map(|t| view! { <p class="companion-brand-tagline">{t}</p> })}
          </div>
          <Sidebar
            categories=categories
            active=active.into()
            on_select=set_active_section
            on_search=move |_| open_search()
          />
        </aside>

        <main class="companion-main">{move || render_section(section.get())}</main>
      </div>

      <SearchModal palette=palette on_select=set_active_section placeholder=placeholder />
    }
}

/// Content component for a section.
pub fn render_section(section: Section) -> AnyView {
    use sections::*;

    match section {
        Section::Overview => view! { <Overview /> }.into_any(),
        Section::ProjectStructure => view! { <ProjectStructure /> }.into_any(),
        Section::SmartPresentational => view! { <SmartPresentational /> }.into_any(),
        Section::ContentProjection => view! { <ContentProjection /> }.into_any(),
        Section::ChangeDetection => view! { <ChangeDetection /> }.into_any(),
        Section::ServiceState => view! { <ServiceState /> }.into_any(),
        Section::Signals => view! { <Signals /> }.into_any(),
        Section::StorePattern => view! { <StorePattern /> }.into_any(),
        Section::DependencyInjection => view! { <DependencyInjection /> }.into_any(),
        Section::Facade => view! { <Facade /> }.into_any(),
        Section::LazyLoading => view! { <LazyLoading /> }.into_any(),
        Section::ErrorHandling => view! { <ErrorHandling /> }.into_any(),
    }
}

/// Shown instead of the shell when the configuration does not load.
#[component]
pub fn ConfigError(
    /// Rendered error message.
    message: String,
) -> impl IntoView {
    view! {
      <div class="companion-fatal">
        <h1>"Architect Companion could not start"</h1>
        <pre>{message}</pre>
      </div>
    }
}
