//! DOM element bindings.
//!
//! Every element the page behaviour touches is resolved once at startup into
//! [`Elements`]. Singular elements are optional: a page that lacks one simply
//! loses the behaviour attached to it.

use pf_ui_core::PageLayout;
use pf_ui_core::details::PANEL_MARKER;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, NodeList};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(|nl| elements_of(&nl))
        .unwrap_or_default()
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

fn elements_of(nl: &NodeList) -> Vec<Element> {
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Set one inline style property. No-op for non-HTML elements.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_css_text(el: &Element, css: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_css_text(css);
    }
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

// ── Elements struct ──

/// Elements belonging to one `.project-card`.
#[derive(Clone)]
pub struct ProjectCardElements {
    pub card: Element,
    pub toggle: Option<Element>,
    pub details: Option<Element>,
    pub details_text: Option<Element>,
}

impl ProjectCardElements {
    fn bind(card: Element) -> Self {
        let toggle = query_within(&card, ".toggle-details");
        let details = query_within(&card, ".project-details");
        let details_text = toggle
            .as_ref()
            .and_then(|t| query_within(t, ".details-text"));
        Self {
            card,
            toggle,
            details,
            details_text,
        }
    }

    pub fn category(&self) -> Option<String> {
        self.card.get_attribute("data-category")
    }
}

/// All DOM element references used by the page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Navigation
    pub nav: Option<Element>,
    pub mobile_menu_button: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub menu_icon: Option<Element>,
    pub close_icon: Option<Element>,
    pub anchors: Vec<Element>,

    // Projects
    pub filter_buttons: Vec<Element>,
    pub project_cards: Vec<ProjectCardElements>,

    // Contact
    pub contact_form: Option<HtmlFormElement>,
    pub submit_button: Option<HtmlButtonElement>,
    pub submit_text: Option<Element>,

    // Footer
    pub current_year: Option<Element>,

    pub lazy_images: Vec<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document has been parsed.
    pub fn bind() -> Elements {
        let contact_form = by_id_typed::<HtmlFormElement>("contact-form");
        let submit_button = contact_form
            .as_ref()
            .and_then(|f| f.query_selector("button[type=\"submit\"]").ok().flatten())
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());

        Elements {
            nav: query("nav"),
            mobile_menu_button: by_id("mobile-menu-button"),
            mobile_menu: by_id("mobile-menu"),
            menu_icon: by_id("menu-icon"),
            close_icon: by_id("close-icon"),
            anchors: query_all("a[href^=\"#\"]"),

            filter_buttons: query_all(".tab-trigger"),
            project_cards: query_all(".project-card")
                .into_iter()
                .map(ProjectCardElements::bind)
                .collect(),

            contact_form,
            submit_button,
            submit_text: by_id("submit-text"),

            current_year: by_id("current-year"),

            lazy_images: query_all("img[data-src]"),
        }
    }

    /// Snapshot of the bound page for building the UI state.
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            filter_tokens: self
                .filter_buttons
                .iter()
                .map(|b| b.get_attribute("data-filter").unwrap_or_default())
                .collect(),
            card_categories: self
                .project_cards
                .iter()
                .map(ProjectCardElements::category)
                .collect(),
            details_expanded: self
                .project_cards
                .iter()
                .map(|c| c.details.as_ref().is_some_and(|d| has_class(d, PANEL_MARKER)))
                .collect(),
            menu_open: self
                .mobile_menu
                .as_ref()
                .is_some_and(|m| !has_class(m, "hidden")),
            lazy_sources: self
                .lazy_images
                .iter()
                .map(|img| img.get_attribute("data-src"))
                .collect(),
        }
    }
}
