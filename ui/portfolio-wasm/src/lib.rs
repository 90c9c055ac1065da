//! Portfolio site WASM frontend
//!
//! Pure Rust + WASM behaviour layer for the static portfolio page.
//! Page state lives in `pf-ui-core`; this crate binds the DOM, wires events
//! and renders state changes. Load it as an ES module so it runs after the
//! document has been parsed.

pub mod config;
pub mod contact;
pub mod dom;
pub mod events;
pub mod lazy;
pub mod menu;
pub mod projects;
pub mod scroll;
pub mod state;
pub mod toast;

use pf_ui_core::UiState;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let config = config::load();
    let els = dom::Elements::bind();
    state::install(UiState::new(config, els.layout()), els.clone());

    stamp_current_year(&els);
    events::bind_events(&els);
    lazy::observe_images(&els);
    expose_globals()
}

fn stamp_current_year(els: &dom::Elements) {
    if let Some(el) = &els.current_year {
        let year = js_sys::Date::new_0().get_full_year();
        dom::set_text(el, &year.to_string());
    }
}

// ── Globals callable from markup ──

#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    scroll::scroll_to_section(section_id);
}

#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top() {
    scroll::scroll_to_top();
}

#[wasm_bindgen(js_name = closeMobileMenu)]
pub fn close_mobile_menu() {
    if let Some(els) = state::elements() {
        menu::close(&els);
    }
}

#[wasm_bindgen(js_name = filterProjects)]
pub fn filter_projects(category: &str) {
    if let Some(els) = state::elements() {
        projects::filter_projects(&els, category);
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(title: &str, description: &str) {
    toast::show_toast(title, description);
}

fn expose(name: &str, f: impl Fn(JsValue, JsValue) + 'static) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn Fn(JsValue, JsValue)>);
    js_sys::Reflect::set(&dom::window(), &JsValue::from_str(name), cb.as_ref())?;
    cb.forget();
    Ok(())
}

/// Mirror the exports onto `window` so inline `onclick` attributes work.
fn expose_globals() -> Result<(), JsValue> {
    let text = |v: JsValue| v.as_string().unwrap_or_default();
    expose("scrollToSection", move |id, _| scroll_to_section(&text(id)))?;
    expose("scrollToTop", |_, _| scroll_to_top())?;
    expose("closeMobileMenu", |_, _| close_mobile_menu())?;
    expose("filterProjects", move |category, _| filter_projects(&text(category)))?;
    expose("showToast", move |title, description| {
        show_toast(&text(title), &text(description))
    })?;
    Ok(())
}
