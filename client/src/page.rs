use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use campus_shared::WidgetConfig;
use campus_shared::config::CONFIG_SCRIPT_ID;

/// Look up an element by id, warning when the page does not have it.
pub(crate) fn element_or_warn(document: &Document, id: &str) -> Option<HtmlElement> {
    let found = document
        .get_element_by_id(id)
        .and_then(|node| node.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        web_sys::console::warn_1(&format!("attendance map: no element #{id}, skipping").into());
    }
    found
}

/// Defaults, overlaid with `<script type="application/json" id="attendance-config">` when present.
pub(crate) fn read_config(document: &Document) -> WidgetConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|node| node.text_content())
    else {
        return WidgetConfig::default();
    };

    match WidgetConfig::from_override_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("attendance map: ignoring #{CONFIG_SCRIPT_ID}: {e}").into(),
            );
            WidgetConfig::default()
        }
    }
}

/// Run `f` once the document has been parsed.
pub(crate) fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let cb = Closure::once(f);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&"attendance map: could not wait for DOMContentLoaded".into());
    }
    cb.forget();
}
