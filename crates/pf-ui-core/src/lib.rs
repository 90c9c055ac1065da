//! Portfolio UI state model.
//!
//! Every piece of page behaviour (menu, project filter, detail panels,
//! contact form, toasts, scroll effects) is an explicit state type here.
//! The wasm frontend owns a [`UiState`] and renders it onto the DOM; nothing
//! in this crate touches a document, so all transitions are testable natively.

pub mod config;
pub mod contact;
pub mod debounce;
pub mod details;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod menu;
pub mod scroll;
pub mod state;
pub mod toast;

#[cfg(test)]
mod timeline;

pub use config::{Labels, SiteConfig};
pub use error::{ConfigError, UiError};
pub use state::{PageLayout, UiState};
