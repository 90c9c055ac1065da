//! Toast notifications.
//!
//! A single `#toast-container` is created on first use and kept for the life
//! of the page. Each toast runs its own timer; the state model decides
//! whether a timer still has anything to do.

use crate::dom;
use crate::state;
use gloo_timers::future::TimeoutFuture;
use pf_ui_core::toast::{Toast, ToastId};
use wasm_bindgen::JsCast;
use web_sys::Element;

const CONTAINER_ID: &str = "toast-container";
const STYLES_ID: &str = "toast-styles";

const CONTAINER_CSS: &str = "position: fixed; bottom: 2rem; right: 2rem; z-index: 100; \
    display: flex; flex-direction: column; gap: 1rem;";

const TOAST_CSS: &str = "min-width: 300px; max-width: 400px; padding: 1rem; \
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3); animation: slideIn 0.3s ease-out;";

const ROW_CSS: &str = "display: flex; justify-content: space-between; align-items: start; gap: 1rem;";
const TITLE_CSS: &str = "font-weight: 600; margin-bottom: 0.25rem;";
const DESCRIPTION_CSS: &str = "font-size: 0.875rem; color: hsl(var(--muted-foreground));";
const DISMISS_CSS: &str = "color: hsl(var(--muted-foreground)); padding: 0.25rem; cursor: pointer; \
    background: none; border: none; font-size: 1.25rem; line-height: 1;";

const KEYFRAMES: &str = "
@keyframes slideIn {
  from { transform: translateX(100%); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(100%); opacity: 0; }
}
";

/// Show a toast and start its lifetime timer.
pub fn show_toast(title: &str, description: &str) -> ToastId {
    let id = state::with_mut(|s| s.toasts.push(title, description));
    mount(id);
    id
}

/// Render a toast already pushed onto the state and start its timer.
pub fn mount(id: ToastId) {
    let Some(toast) = state::with(|s| s.toasts.get(id).cloned()) else {
        return;
    };
    if attach(&toast).is_none() {
        // Nothing on screen means no timer will ever remove it.
        state::with_mut(|s| s.toasts.remove(id));
        gloo_console::warn!(format!("toast {id} could not be rendered"));
        return;
    }
    schedule_exit(id);
}

fn attach(toast: &Toast) -> Option<()> {
    ensure_styles();
    let container = ensure_container()?;
    let el = build(toast)?;
    container.append_child(&el).ok()?;
    Some(())
}

/// Remove a toast now. Safe to call for a toast that is already gone.
pub fn dismiss(id: ToastId) {
    state::with_mut(|s| s.toasts.remove(id));
    if let Some(el) = find(id) {
        el.remove();
    }
}

fn schedule_exit(id: ToastId) {
    let config = state::config();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(config.toast_lifetime_ms).await;
        if !state::with_mut(|s| s.toasts.begin_exit(id)) {
            return;
        }
        if let Some(el) = find(id) {
            let animation = format!("slideOut {}ms ease-out", config.toast_exit_ms);
            dom::set_style(&el, "animation", &animation);
        }

        TimeoutFuture::new(config.toast_exit_ms).await;
        if state::with_mut(|s| s.toasts.remove(id)) {
            if let Some(el) = find(id) {
                el.remove();
            }
        }
    });
}

fn find(id: ToastId) -> Option<Element> {
    dom::query(&format!("#{CONTAINER_ID} [data-toast-id=\"{id}\"]"))
}

fn ensure_container() -> Option<Element> {
    if let Some(existing) = dom::by_id(CONTAINER_ID) {
        return Some(existing);
    }
    let container = dom::create_element("div")?;
    container.set_id(CONTAINER_ID);
    dom::set_css_text(&container, CONTAINER_CSS);
    dom::document().body()?.append_child(&container).ok()?;
    Some(container)
}

fn ensure_styles() {
    if dom::by_id(STYLES_ID).is_some() {
        return;
    }
    let Some(style) = dom::create_element("style") else {
        return;
    };
    style.set_id(STYLES_ID);
    dom::set_text(&style, KEYFRAMES);
    if let Some(head) = dom::document().head() {
        let _ = head.append_child(&style);
    }
}

fn styled(tag: &str, css: &str) -> Option<Element> {
    let el = dom::create_element(tag)?;
    let _ = el.set_attribute("style", css);
    Some(el)
}

/// Build the toast card. Title and description go in as text, never markup.
fn build(toast: &Toast) -> Option<Element> {
    let card = styled("div", TOAST_CSS)?;
    dom::add_class(&card, "card");
    let _ = card.set_attribute("data-toast-id", &toast.id.to_string());

    let row = styled("div", ROW_CSS)?;
    let body = dom::create_element("div")?;
    let title = styled("div", TITLE_CSS)?;
    dom::set_text(&title, &toast.title);
    let description = styled("div", DESCRIPTION_CSS)?;
    dom::set_text(&description, &toast.description);

    let dismiss_btn = styled("button", DISMISS_CSS)?;
    let _ = dismiss_btn.set_attribute("type", "button");
    let _ = dismiss_btn.set_attribute("aria-label", "Dismiss");
    dom::set_text(&dismiss_btn, "\u{00d7}");
    let id = toast.id;
    let on_dismiss = wasm_bindgen::closure::Closure::once_into_js(move || dismiss(id));
    let _ = dismiss_btn
        .add_event_listener_with_callback("click", on_dismiss.unchecked_ref());

    body.append_child(&title).ok()?;
    body.append_child(&description).ok()?;
    row.append_child(&body).ok()?;
    row.append_child(&dismiss_btn).ok()?;
    card.append_child(&row).ok()?;
    Some(card)
}
