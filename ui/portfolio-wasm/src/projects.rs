//! Project list: category filter and per-card detail panels.
//!
//! Filtering renders the first half of every card fade immediately, then
//! awaits each card's delay and asks the state model to settle it. A settle
//! that lost to a newer selection renders nothing.

use crate::dom::{self, Elements};
use crate::state;
use gloo_timers::future::TimeoutFuture;
use pf_ui_core::details::{PANEL_MARKER, TRIGGER_MARKER};
use pf_ui_core::filter::FilterToken;

pub fn filter_projects(els: &Elements, category: &str) {
    let token = FilterToken::parse(category);
    let transitions = state::with_mut(|s| s.filter.select(token));
    let config = state::config();

    render_buttons(els);
    for t in &transitions {
        render_card(els, t.card);
    }

    for t in transitions {
        let delay = t.delay_ms(&config);
        let els = els.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            match state::with_mut(|s| s.filter.settle(t)) {
                Ok(true) => render_card(&els, t.card),
                Ok(false) => {}
                Err(e) => gloo_console::warn!(e.to_string()),
            }
        });
    }
}

fn render_buttons(els: &Elements) {
    let active: Vec<bool> = state::with(|s| s.filter.buttons().iter().map(|b| b.is_active()).collect());
    for (el, is_active) in els.filter_buttons.iter().zip(active) {
        dom::toggle_class(el, "active", is_active);
    }
}

fn render_card(els: &Elements, index: usize) {
    let Some(phase) = state::with(|s| s.filter.card(index).map(|c| c.phase())) else {
        return;
    };
    let Some(card) = els.project_cards.get(index) else {
        return;
    };
    let style = phase.style();
    if let Some(display) = style.display {
        dom::set_style(&card.card, "display", display);
    }
    if let Some(opacity) = style.opacity {
        dom::set_style(&card.card, "opacity", opacity);
    }
    if let Some(transform) = style.transform {
        dom::set_style(&card.card, "transform", transform);
    }
}

pub fn toggle_details(els: &Elements, index: usize) {
    let toggled = state::with_mut(|s| {
        s.details
            .toggle(index)
            .map(|d| (d.is_expanded(), d.label(&s.config.labels).to_owned()))
    });
    let (expanded, label) = match toggled {
        Ok(v) => v,
        Err(e) => {
            gloo_console::warn!(e.to_string());
            return;
        }
    };

    let Some(card) = els.project_cards.get(index) else {
        return;
    };
    if let Some(details) = &card.details {
        dom::toggle_class(details, PANEL_MARKER, expanded);
    }
    if let Some(toggle) = &card.toggle {
        dom::toggle_class(toggle, TRIGGER_MARKER, expanded);
    }
    if let Some(text) = &card.details_text {
        dom::set_text(text, &label);
    }
}
