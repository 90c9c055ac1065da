//! Per-card detail panels.

use crate::config::Labels;
use crate::error::UiError;

/// Marker class on `.project-details` while expanded.
pub const PANEL_MARKER: &str = "show";
/// Marker class on `.toggle-details` while expanded.
pub const TRIGGER_MARKER: &str = "expanded";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Collapsed,
    Expanded,
}

impl DetailState {
    pub fn toggled(self) -> Self {
        match self {
            DetailState::Collapsed => DetailState::Expanded,
            DetailState::Expanded => DetailState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == DetailState::Expanded
    }

    pub fn label(self, labels: &Labels) -> &str {
        match self {
            DetailState::Collapsed => &labels.view_details,
            DetailState::Expanded => &labels.show_less,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DetailPanels {
    states: Vec<DetailState>,
}

impl DetailPanels {
    pub fn new(cards: usize) -> Self {
        Self {
            states: vec![DetailState::Collapsed; cards],
        }
    }

    /// Seed from the markup: `true` for a card whose panel already shows.
    pub fn from_initial<I>(expanded: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            states: expanded
                .into_iter()
                .map(|open| {
                    if open {
                        DetailState::Expanded
                    } else {
                        DetailState::Collapsed
                    }
                })
                .collect(),
        }
    }

    pub fn state(&self, card: usize) -> Option<DetailState> {
        self.states.get(card).copied()
    }

    pub fn toggle(&mut self, card: usize) -> Result<DetailState, UiError> {
        let state = self
            .states
            .get_mut(card)
            .ok_or(UiError::UnknownCard(card))?;
        *state = state.toggled();
        Ok(*state)
    }
}
