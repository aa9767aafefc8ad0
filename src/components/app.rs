use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::spark_view::SparkView;

/// `'ontouchstart' in document.documentElement` — same probe the classic
/// touch demos use.
fn touch_capable() -> bool {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .map(|el| {
            js_sys::Reflect::has(&el, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        })
        .unwrap_or(false)
}

#[function_component(App)]
pub fn app() -> Html {
    // No touch support: show the notice and wire nothing at all.
    if !touch_capable() {
        return html! {
            <p class="no-touch-notice">
                { "Sorry, this demonstration requires a touch-enabled device to work." }
            </p>
        };
    }

    html! { <SparkView /> }
}
