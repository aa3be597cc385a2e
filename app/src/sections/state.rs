use companion_ui::{ArticleHeader, Example, Note, NoteKind, Prose};
use leptos::prelude::*;

#[component]
pub fn ServiceState() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Service-Based State"
          lead="A root-provided service with a private subject is often all the state management you need."
        />
        <Prose>
          <p>
            "Expose read-only observables and a handful of intent methods. Components never call "
            <code>"next()"</code> " themselves."
          </p>
        </Prose>
        <Example id="state/cart.service.ts" />
      </article>
    }
}

#[component]
pub fn Signals() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Signals"
          lead="Synchronous reactive values with automatic dependency tracking."
        />
        <Prose>
          <p>
            <code>"signal()"</code> " holds a value, " <code>"computed()"</code>
            " derives from other signals and memoizes, " <code>"effect()"</code>
            " runs side effects when its dependencies change."
          </p>
        </Prose>
        <Example id="state/counter.signals.ts" />
        <Note kind=NoteKind::Tip>
          "Reach for " <code>"computed()"</code> " before " <code>"effect()"</code>
          ". Effects that write to other signals are usually a derived value in disguise."
        </Note>
      </article>
    }
}

#[component]
pub fn StorePattern() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Store Pattern"
          lead="One immutable state object, updated through named operations."
        />
        <Prose>
          <p>
            "A store keeps the whole feature state in a single signal and exposes selectors as "
            "computed values. Every update produces a new object, which keeps OnPush views honest."
          </p>
        </Prose>
        <Example id="state/todo.store.ts" />
      </article>
    }
}
