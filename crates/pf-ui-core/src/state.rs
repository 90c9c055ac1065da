//! Aggregate UI state.
//!
//! One value holds every piece of page state. The frontend keeps it in a
//! thread-local and passes it to its render functions.

use crate::config::SiteConfig;
use crate::contact::{ContactForm, ContactSubmission};
use crate::debounce::Debouncer;
use crate::details::DetailPanels;
use crate::filter::ProjectFilter;
use crate::lazy::LazyImages;
use crate::menu::MenuState;
use crate::scroll::ScrollTracker;
use crate::toast::{ToastId, ToastStack};

/// What the page looked like at bind time.
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    pub filter_tokens: Vec<String>,
    pub card_categories: Vec<Option<String>>,
    /// Per card, whether `.project-details` already carries the `show` marker.
    /// Missing entries count as collapsed.
    pub details_expanded: Vec<bool>,
    pub menu_open: bool,
    /// `data-src` of each observed lazy image, in document order.
    pub lazy_sources: Vec<Option<String>>,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub config: SiteConfig,
    pub menu: MenuState,
    pub filter: ProjectFilter,
    pub details: DetailPanels,
    pub contact: ContactForm,
    pub toasts: ToastStack,
    pub scroll: ScrollTracker,
    pub scroll_debounce: Debouncer,
    pub lazy: LazyImages,
}

impl UiState {
    pub fn new(config: SiteConfig, layout: PageLayout) -> Self {
        let cards = layout.card_categories.len();
        Self {
            config,
            menu: MenuState::from_panel_hidden(!layout.menu_open),
            filter: ProjectFilter::new(layout.filter_tokens, layout.card_categories),
            details: DetailPanels::from_initial(
                (0..cards).map(|i| layout.details_expanded.get(i).copied().unwrap_or(false)),
            ),
            contact: ContactForm::default(),
            toasts: ToastStack::default(),
            scroll: ScrollTracker::default(),
            scroll_debounce: Debouncer::default(),
            lazy: LazyImages::new(layout.lazy_sources),
        }
    }

    /// Finish the simulated submission and raise the success toast.
    pub fn finish_contact(&mut self) -> Option<(ContactSubmission, ToastId)> {
        let submission = self.contact.finish()?;
        let labels = &self.config.labels;
        let toast = self
            .toasts
            .push(labels.success_title.clone(), labels.success_body.clone());
        Some((submission, toast))
    }
}
