//! Example registry: literal source snippets keyed by a path-like id.
//!
//! The table is fixed at compile time. A lookup miss is not an error: it
//! yields a placeholder comment naming the missing id, so the gap shows up
//! in the rendered page instead of breaking it.

use std::borrow::Cow;

/// Compile-time table of example sources.
static EXAMPLES: &[(&str, &str)] = &[
    (
        "overview/app.config.ts",
        include_str!("../snippets/overview/app.config.ts"),
    ),
    (
        "structure/feature-layout.txt",
        include_str!("../snippets/structure/feature-layout.txt"),
    ),
    (
        "components/user-list.container.ts",
        include_str!("../snippets/components/user-list.container.ts"),
    ),
    (
        "components/user-card.component.ts",
        include_str!("../snippets/components/user-card.component.ts"),
    ),
    (
        "components/panel.component.ts",
        include_str!("../snippets/components/panel.component.ts"),
    ),
    (
        "components/on-push.component.ts",
        include_str!("../snippets/components/on-push.component.ts"),
    ),
    (
        "state/cart.service.ts",
        include_str!("../snippets/state/cart.service.ts"),
    ),
    (
        "state/counter.signals.ts",
        include_str!("../snippets/state/counter.signals.ts"),
    ),
    (
        "state/todo.store.ts",
        include_str!("../snippets/state/todo.store.ts"),
    ),
    (
        "di/injection-tokens.ts",
        include_str!("../snippets/di/injection-tokens.ts"),
    ),
    (
        "architecture/orders.facade.ts",
        include_str!("../snippets/architecture/orders.facade.ts"),
    ),
    (
        "architecture/lazy.routes.ts",
        include_str!("../snippets/architecture/lazy.routes.ts"),
    ),
    (
        "architecture/error.interceptor.ts",
        include_str!("../snippets/architecture/error.interceptor.ts"),
    ),
];

/// Read-only view over an id to source table.
#[derive(Debug, Clone, Copy)]
pub struct ExampleRegistry {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for ExampleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExampleRegistry {
    /// The registry compiled into this crate.
    pub fn builtin() -> Self {
        Self { entries: EXAMPLES }
    }

    /// A registry over a caller-supplied table.
    pub fn from_static(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Stored text for `id`, if present.
    pub fn lookup(&self, id: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find_map(|(key, source)| (*key == id).then_some(*source))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// All ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source for `id`, or a placeholder comment when it is missing.
    pub fn get(&self, id: &str) -> Cow<'static, str> {
        match self.lookup(id) {
            Some(source) => Cow::Borrowed(source),
            None => {
                tracing::warn!(id, "example file not found in registry");
                Cow::Owned(placeholder(id))
            }
        }
    }
}

/// Placeholder text shown for a missing example.
pub fn placeholder(id: &str) -> String {
    format!("// Example file not found: {id}")
}

/// Look up an example in the builtin registry.
pub fn get_example(id: &str) -> Cow<'static, str> {
    ExampleRegistry::builtin().get(id)
}
