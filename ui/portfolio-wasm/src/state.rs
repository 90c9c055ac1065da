//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Borrows must not be held across an `.await` or a call that can dispatch
//! DOM events.

use crate::dom::Elements;
use pf_ui_core::{SiteConfig, UiState};
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<UiState> = RefCell::new(UiState::default());
    static ELEMENTS: RefCell<Option<Elements>> = const { RefCell::new(None) };
}

/// Install the state and bound elements. Called once from `init`.
pub fn install(state: UiState, els: Elements) {
    STATE.with(|s| *s.borrow_mut() = state);
    ELEMENTS.with(|e| *e.borrow_mut() = Some(els));
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&UiState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut UiState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Elements bound at startup; `None` before `init` has run.
pub fn elements() -> Option<Elements> {
    ELEMENTS.with(|e| e.borrow().clone())
}

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}
