//! Highlighted code blocks with a copy button.

use std::time::Duration;

use companion_core::{
    CopyFeedback, ExampleRegistry, clipboard::DEFAULT_FEEDBACK, config::CodeConfig,
};
use leptos::{leptos_dom::helpers::set_timeout, prelude::*, task::spawn_local};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard.
///
/// Fails when the Clipboard API is unavailable (insecure context, old
/// browser) or the browser rejects the write.
pub async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Syntax-highlighted code block.
#[component]
pub fn CodeBlock(
    /// Source text to display and copy.
    #[prop(into)]
    code: String,
    /// Optional caption, usually the example file name.
    #[prop(optional, into)]
    title: Option<String>,
    /// How long "Copied!" stays visible.
    #[prop(default = DEFAULT_FEEDBACK)]
    feedback: Duration,
) -> impl IntoView {
    let html = companion_highlight::highlight(&code);
    let code = StoredValue::new(code);
    let state = RwSignal::new(CopyFeedback::new());
    let copied = Memo::new(move |_| state.with(|s| s.is_copied()));

    let on_copy = move |_| {
        let text = code.get_value();
        spawn_local(async move {
            if let Err(err) = write_clipboard(&text).await {
                log::warn!("copy to clipboard failed: {err:?}");
                return;
            }

            // The block may have been unmounted while the write was pending.
            let Some(ticket) = state.try_update(|s| s.acknowledge()) else {
                return;
            };
            set_timeout(
                move || {
                    let _ = state.try_update(|s| s.expire(ticket));
                },
                feedback,
            );
        });
    };

    view! {
      <figure class="companion-code">
        <div class="companion-code-header">
          <figcaption class="companion-code-title">{title}</figcaption>
          <button
            class="companion-code-copy"
            class:copied=move || copied.get()
            aria-label="Copy code to clipboard"
            on:click=on_copy
          >
            {move || if copied.get() { "Copied!" } else { "Copy" }}
          </button>
        </div>
        <pre class="companion-code-pre">
          <code inner_html=html></code>
        </pre>
      </figure>
    }
}

/// Code block for an entry of the example registry.
///
/// A missing id renders the registry's placeholder comment.
#[component]
pub fn Example(
    /// Registry id, e.g. `state/cart.service.ts`.
    id: &'static str,
) -> impl IntoView {
    let source = ExampleRegistry::builtin().get(id).into_owned();
    let feedback = use_context::<CodeConfig>()
        .map(|c| c.copy_feedback())
        .unwrap_or(DEFAULT_FEEDBACK);

    view! { <CodeBlock code=source title=id feedback=feedback /> }
}
