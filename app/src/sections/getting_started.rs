use companion_ui::{ArticleHeader, Example, Note, NoteKind, Prose};
use leptos::prelude::*;

#[component]
pub fn Overview() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Overview"
          lead="A field guide to structuring Angular applications that stay easy to change."
        />
        <Prose>
          <p>
            "Each topic in the sidebar covers one pattern: what problem it solves, the shape of "
            "the code, and where it tends to go wrong. Start here, then jump around with "
            <kbd>"⌘K"</kbd> " / " <kbd>"Ctrl+K"</kbd> "."
          </p>
          <p>
            "Modern Angular applications are bootstrapped from a single configuration object. "
            "Application-wide providers live there rather than in a root module."
          </p>
        </Prose>
        <Example id="overview/app.config.ts" />
        <Note kind=NoteKind::Tip>
          "Keep this file short. If it grows past a screen, move feature providers next to "
          "the routes that need them."
        </Note>
      </article>
    }
}

#[component]
pub fn ProjectStructure() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Project Structure"
          lead="Group code by feature first, by technical role second."
        />
        <Prose>
          <p>
            "A feature folder owns everything it needs: its routes, its data access and its UI. "
            "Cross-cutting singletons go in " <code>"core/"</code> ", reusable presentational "
            "pieces in " <code>"shared/"</code> "."
          </p>
        </Prose>
        <Example id="structure/feature-layout.txt" />
        <Note kind=NoteKind::Warning>
          "A " <code>"shared/"</code> " folder that imports from " <code>"features/"</code>
          " is a dependency cycle waiting to happen."
        </Note>
      </article>
    }
}
