//! Mobile menu.

use crate::dom::{self, Elements};
use crate::state;
use pf_ui_core::menu::MenuView;

pub fn render(els: &Elements, view: MenuView) {
    if let Some(panel) = &els.mobile_menu {
        dom::toggle_class(panel, "hidden", view.panel_hidden);
    }
    if let Some(icon) = &els.menu_icon {
        dom::toggle_class(icon, "hidden", view.menu_icon_hidden);
    }
    if let Some(icon) = &els.close_icon {
        dom::toggle_class(icon, "hidden", view.close_icon_hidden);
    }
}

pub fn on_toggle(els: &Elements) {
    let view = state::with_mut(|s| s.menu.toggle());
    render(els, view);
}

/// Close the menu (also used after following a nav link).
pub fn close(els: &Elements) {
    if els.mobile_menu.is_none() {
        return;
    }
    let view = state::with_mut(|s| s.menu.close());
    render(els, view);
}
