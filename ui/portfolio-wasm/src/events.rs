//! Event binding.
//!
//! Wires every page listener. Handlers that wait on a timer spawn via
//! `wasm_bindgen_futures::spawn_local` inside their own module.

use crate::contact;
use crate::dom::Elements;
use crate::menu;
use crate::projects;
use crate::scroll;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Helper: attach a click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let _ = $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }};
}

/// Bind all page listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Mobile menu ──
    if let (Some(button), Some(_)) = (&els.mobile_menu_button, &els.mobile_menu) {
        let els2 = els.clone();
        on_click!(button, move |_: web_sys::MouseEvent| {
            menu::on_toggle(&els2);
        });
    }

    // ── Project filters ──
    for button in &els.filter_buttons {
        let token = button.get_attribute("data-filter").unwrap_or_default();
        let els2 = els.clone();
        on_click!(button, move |_: web_sys::MouseEvent| {
            projects::filter_projects(&els2, &token);
        });
    }

    // ── Project details ──
    for (index, card) in els.project_cards.iter().enumerate() {
        if let Some(toggle) = &card.toggle {
            let els2 = els.clone();
            on_click!(toggle, move |_: web_sys::MouseEvent| {
                projects::toggle_details(&els2, index);
            });
        }
    }

    // ── Contact form ──
    if let Some(form) = &els.contact_form {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            contact::on_submit(&els2, &e);
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // ── Smooth scroll ──
    for anchor in &els.anchors {
        let anchor2 = anchor.clone();
        on_click!(anchor, move |e: web_sys::MouseEvent| {
            scroll::on_anchor_click(&anchor2, &e);
        });
    }

    // ── Nav shadow ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            scroll::on_scroll(&els2);
        }) as Box<dyn FnMut(_)>);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_passive(true);
        let _ = crate::dom::window()
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                cb.as_ref().unchecked_ref(),
                &opts,
            );
        cb.forget();
    }
}
