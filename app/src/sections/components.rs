use companion_ui::{ArticleHeader, Example, Note, NoteKind, Prose};
use leptos::prelude::*;

#[component]
pub fn SmartPresentational() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Smart & Presentational Components"
          lead="Split components that know where data comes from from components that only display it."
        />
        <Prose>
          <p>
            "Container (smart) components inject services, subscribe to state and handle "
            "navigation. Presentational components receive inputs, emit outputs and nothing else."
          </p>
        </Prose>
        <Example id="components/user-list.container.ts" />
        <Prose>
          <p>"The card below can be rendered in a test or a storybook with no providers at all."</p>
        </Prose>
        <Example id="components/user-card.component.ts" />
      </article>
    }
}

#[component]
pub fn ContentProjection() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Content Projection"
          lead="Let callers decide what goes inside a layout component."
        />
        <Prose>
          <p>
            <code>"<ng-content>"</code> " slots turn a component into a frame. Named slots use a "
            "CSS selector, and the unnamed slot catches everything else."
          </p>
        </Prose>
        <Example id="components/panel.component.ts" />
        <Note>
          "Projected content is created by the parent, so it is instantiated even when the "
          "slot sits inside a false " <code>"@if"</code> "."
        </Note>
      </article>
    }
}

#[component]
pub fn ChangeDetection() -> impl IntoView {
    view! {
      <article class="companion-article">
        <ArticleHeader
          title="Change Detection"
          lead="OnPush components re-render only when their inputs change by reference."
        />
        <Prose>
          <p>
            "With " <code>"ChangeDetectionStrategy.OnPush"</code> " a component is checked when "
            "an input reference changes, an event fires inside it, or a signal it reads updates."
          </p>
        </Prose>
        <Example id="components/on-push.component.ts" />
        <Note kind=NoteKind::Warning>
          "Mutating an array or object in place does not change its reference. Replace it instead."
        </Note>
      </article>
    }
}
