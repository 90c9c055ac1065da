//! Contact form.
//!
//! Submission is simulated: the handler waits `submit_delay_ms`, raises the
//! success toast and logs the fields to the console. Nothing leaves the page.

use crate::dom::{self, Elements};
use crate::state;
use crate::toast;
use gloo_timers::future::TimeoutFuture;
use pf_ui_core::contact::ContactSubmission;
use web_sys::{FormData, HtmlFormElement};

/// `submit` listener on `#contact-form`.
pub fn on_submit(els: &Elements, event: &web_sys::Event) {
    event.prevent_default();
    let Some(form) = &els.contact_form else {
        return;
    };

    let submission = read_fields(form);
    if let Err(e) = state::with_mut(|s| s.contact.submit(submission)) {
        gloo_console::warn!(e.to_string());
        return;
    }
    render_submit(els);

    let delay = state::with(|s| s.config.submit_delay_ms);
    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay).await;
        finish(&els);
    });
}

fn finish(els: &Elements) {
    let Some((submission, toast_id)) = state::with_mut(|s| s.finish_contact()) else {
        return;
    };
    toast::mount(toast_id);
    if let Some(form) = &els.contact_form {
        form.reset();
    }
    render_submit(els);

    match serde_wasm_bindgen::to_value(&submission) {
        Ok(fields) => gloo_console::log!("Form submitted:", fields),
        Err(_) => gloo_console::log!(format!("Form submitted: {submission:?}")),
    }
}

/// Read the three named fields. Missing fields read as empty strings.
fn read_fields(form: &HtmlFormElement) -> ContactSubmission {
    let data = FormData::new_with_form(form).ok();
    let field = |name: &str| {
        data.as_ref()
            .and_then(|d| d.get(name).as_string())
            .unwrap_or_default()
    };
    ContactSubmission {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    }
}

fn render_submit(els: &Elements) {
    let (disabled, label) = state::with(|s| {
        (
            s.contact.submit_disabled(),
            s.contact.submit_label(&s.config.labels).to_owned(),
        )
    });
    if let Some(button) = &els.submit_button {
        button.set_disabled(disabled);
    }
    if let Some(text) = &els.submit_text {
        dom::set_text(text, &label);
    }
}
