//! Content sections addressable by navigation id.
//!
//! Sections are a closed set so that the shell can map each one to a
//! component with an exhaustive `match`. Unknown ids resolve to
//! [`Section::DEFAULT`].

use std::fmt;

/// A content unit rendered into the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    ProjectStructure,
    SmartPresentational,
    ContentProjection,
    ChangeDetection,
    ServiceState,
    Signals,
    StorePattern,
    DependencyInjection,
    Facade,
    LazyLoading,
    ErrorHandling,
}

impl Section {
    /// Section shown when an id has no mapping.
    pub const DEFAULT: Section = Section::Overview;

    /// Every section, in sidebar order.
    pub const ALL: [Section; 12] = [
        Section::Overview,
        Section::ProjectStructure,
        Section::SmartPresentational,
        Section::ContentProjection,
        Section::ChangeDetection,
        Section::ServiceState,
        Section::Signals,
        Section::StorePattern,
        Section::DependencyInjection,
        Section::Facade,
        Section::LazyLoading,
        Section::ErrorHandling,
    ];

    /// Stable navigation id.
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::ProjectStructure => "project-structure",
            Section::SmartPresentational => "smart-presentational",
            Section::ContentProjection => "content-projection",
            Section::ChangeDetection => "change-detection",
            Section::ServiceState => "service-state",
            Section::Signals => "signals",
            Section::StorePattern => "store-pattern",
            Section::DependencyInjection => "dependency-injection",
            Section::Facade => "facade",
            Section::LazyLoading => "lazy-loading",
            Section::ErrorHandling => "error-handling",
        }
    }

    /// Parse a navigation id.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Parse a navigation id, falling back to [`Section::DEFAULT`].
    ///
    /// The fallback is fixed; it does not follow `site.default_section`.
    pub fn resolve(id: &str) -> Section {
        Section::from_id(id).unwrap_or_else(|| {
            tracing::debug!(id, "no section for id, using default");
            Section::DEFAULT
        })
    }

    /// Example registry ids the section's code blocks display.
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            Section::Overview => &["overview/app.config.ts"],
            Section::ProjectStructure => &["structure/feature-layout.txt"],
            Section::SmartPresentational => &[
                "components/user-list.container.ts",
                "components/user-card.component.ts",
            ],
            Section::ContentProjection => &["components/panel.component.ts"],
            Section::ChangeDetection => &["components/on-push.component.ts"],
            Section::ServiceState => &["state/cart.service.ts"],
            Section::Signals => &["state/counter.signals.ts"],
            Section::StorePattern => &["state/todo.store.ts"],
            Section::DependencyInjection => &["di/injection-tokens.ts"],
            Section::Facade => &["architecture/orders.facade.ts"],
            Section::LazyLoading => &["architecture/lazy.routes.ts"],
            Section::ErrorHandling => &["architecture/error.interceptor.ts"],
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::DEFAULT
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
