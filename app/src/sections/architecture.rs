use companion_ui::{ArticleHeader, Example, Note, NoteKind, Prose};
use leptos::prelude::*;

#[component]
pub fn DependencyInjection() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Dependency Injection"
          lead="Depend on tokens, not on concrete values."
        />
        <Prose>
          <p>
            "An " <code>"InjectionToken"</code> " with a factory gives a sensible default that "
            "tests and feature routes can override with their own provider."
          </p>
        </Prose>
        <Example id="di/injection-tokens.ts" />
        <Note>
          <code>"inject()"</code> " only works in an injection context: constructors, field "
          "initializers and factory functions."
        </Note>
      </article>
    }
}

#[component]
pub fn Facade() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Facade Pattern"
          lead="Give components one narrow entry point into a feature's data layer."
        />
        <Prose>
          <p>
            "The facade hides whether state comes from an HTTP call, a store or a cache. "
            "Swapping the implementation later does not touch a single component."
          </p>
        </Prose>
        <Example id="architecture/orders.facade.ts" />
      </article>
    }
}

#[component]
pub fn LazyLoading() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Lazy-Loaded Features"
          lead="Ship the code for a feature only when a user navigates to it."
        />
        <Prose>
          <p>
            <code>"loadComponent"</code> " and " <code>"loadChildren"</code>
            " split the bundle at route boundaries. Guards on " <code>"canMatch"</code>
            " stop the chunk from downloading at all."
          </p>
        </Prose>
        <Example id="architecture/lazy.routes.ts" />
        <Note kind=NoteKind::Tip>
          "Default exports let the import callback skip the " <code>".then(m => m.X)"</code> " step."
        </Note>
      </article>
    }
}

#[component]
pub fn ErrorHandling() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Error Handling"
          lead="Handle transport errors once, in an interceptor."
        />
        <Prose>
          <p>
            "Retries, session expiry and user notifications belong in one functional interceptor. "
            "Components only deal with errors that mean something to them."
          </p>
        </Prose>
        <Example id="architecture/error.interceptor.ts" />
        <Note kind=NoteKind::Warning>
          "Always rethrow. Swallowing the error in the interceptor leaves callers waiting forever."
        </Note>
      </article>
    }
}
