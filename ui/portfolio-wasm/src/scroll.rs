//! Smooth scrolling and the debounced nav shadow.

use crate::dom::{self, Elements};
use crate::state;
use gloo_timers::future::TimeoutFuture;
use pf_ui_core::scroll;
use web_sys::{ScrollBehavior, ScrollToOptions};

fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

/// Scroll so the section with `section_id` sits just below the sticky nav.
/// Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let Some(target) = dom::by_id(section_id) else {
        return;
    };
    let page_y = dom::window().page_y_offset().unwrap_or(0.0);
    let nav_offset = state::with(|s| s.config.nav_offset_px);
    let top = scroll::scroll_offset(target.get_bounding_client_rect().top(), page_y, nav_offset);
    smooth_scroll_to(top);
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Click handler for in-page anchors.
pub fn on_anchor_click(anchor: &web_sys::Element, event: &web_sys::MouseEvent) {
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(section_id) = scroll::anchor_target(&href) else {
        return;
    };
    event.prevent_default();
    scroll_to_section(section_id);
}

fn current_scroll_top() -> f64 {
    let y = dom::window().page_y_offset().unwrap_or(0.0);
    if y != 0.0 {
        return y;
    }
    dom::document()
        .document_element()
        .map(|root| f64::from(root.scroll_top()))
        .unwrap_or(0.0)
}

/// Window `scroll` listener. Only the last event of a burst updates the nav.
pub fn on_scroll(els: &Elements) {
    let ticket = state::with_mut(|s| s.scroll_debounce.trigger());
    let delay = state::with(|s| s.config.scroll_debounce_ms);
    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay).await;
        if state::with_mut(|s| s.scroll_debounce.fire(ticket)) {
            update_nav_shadow(&els);
        }
    });
}

fn update_nav_shadow(els: &Elements) {
    let top = current_scroll_top();
    let shadow = state::with_mut(|s| s.scroll.observe(top));
    if let Some(nav) = &els.nav {
        dom::set_style(nav, "box-shadow", shadow.css());
    }
}
