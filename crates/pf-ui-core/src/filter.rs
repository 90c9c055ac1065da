//! Project list filtering.
//!
//! Each card moves through `Shown → Leaving → Hidden` or
//! `Hidden → Entering → Shown` when a filter is selected. The second half of
//! every move is completed by [`ProjectFilter::settle`] once the fade delay
//! has elapsed. Cards carry a generation counter so that a completion from
//! an earlier selection cannot override a later one.

use tracing::debug;

use crate::config::SiteConfig;
use crate::error::UiError;

/// Reserved token that matches every card.
pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterToken {
    All,
    Category(String),
}

impl FilterToken {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            FilterToken::All
        } else {
            FilterToken::Category(raw.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterToken::All => ALL,
            FilterToken::Category(c) => c,
        }
    }

    /// Exact string comparison; a card without a category only matches `all`.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Category(c) => category == Some(c.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Shown,
    /// Back in layout, waiting for the fade-in.
    Entering,
    /// Fading out, still in layout.
    Leaving,
    Hidden,
}

/// Inline style writes for a phase. `None` leaves the property untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub display: Option<&'static str>,
    pub opacity: Option<&'static str>,
    pub transform: Option<&'static str>,
}

impl CardPhase {
    pub fn in_layout(self) -> bool {
        !matches!(self, CardPhase::Hidden)
    }

    pub fn style(self) -> CardStyle {
        match self {
            CardPhase::Shown => CardStyle {
                display: Some("flex"),
                opacity: Some("1"),
                transform: Some("scale(1)"),
            },
            CardPhase::Entering => CardStyle {
                display: Some("flex"),
                opacity: None,
                transform: None,
            },
            CardPhase::Leaving => CardStyle {
                display: None,
                opacity: Some("0"),
                transform: Some("scale(0.95)"),
            },
            CardPhase::Hidden => CardStyle {
                display: Some("none"),
                opacity: Some("0"),
                transform: Some("scale(0.95)"),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

/// A pending second half of a card move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardTransition {
    pub card: usize,
    pub generation: u64,
    pub fade: Fade,
}

impl CardTransition {
    pub fn delay_ms(&self, config: &SiteConfig) -> u32 {
        match self.fade {
            Fade::In => config.reveal_delay_ms,
            Fade::Out => config.hide_delay_ms,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButton {
    token: String,
    active: bool,
}

impl FilterButton {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    category: Option<String>,
    phase: CardPhase,
    generation: u64,
}

impl ProjectCard {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectFilter {
    buttons: Vec<FilterButton>,
    cards: Vec<ProjectCard>,
    selected: Option<FilterToken>,
}

impl ProjectFilter {
    /// All cards start shown and no button is marked active; the markup's
    /// initial `active` class stays until the first selection.
    pub fn new<B, C>(button_tokens: B, card_categories: C) -> Self
    where
        B: IntoIterator<Item = String>,
        C: IntoIterator<Item = Option<String>>,
    {
        Self {
            buttons: button_tokens
                .into_iter()
                .map(|token| FilterButton {
                    token,
                    active: false,
                })
                .collect(),
            cards: card_categories
                .into_iter()
                .map(|category| ProjectCard {
                    category,
                    phase: CardPhase::Shown,
                    generation: 0,
                })
                .collect(),
            selected: None,
        }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&ProjectCard> {
        self.cards.get(index)
    }

    pub fn selected(&self) -> Option<&FilterToken> {
        self.selected.as_ref()
    }

    /// Indices of cards currently taking up layout space.
    pub fn visible_cards(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.phase.in_layout())
            .map(|(i, _)| i)
            .collect()
    }

    /// Select a filter: mark the matching button active and start a fade on
    /// every card. The returned transitions must be passed to [`settle`]
    /// after their delay.
    ///
    /// [`settle`]: ProjectFilter::settle
    pub fn select(&mut self, token: FilterToken) -> Vec<CardTransition> {
        for button in &mut self.buttons {
            button.active = button.token == token.as_str();
        }

        let transitions: Vec<CardTransition> = self
            .cards
            .iter_mut()
            .enumerate()
            .map(|(card, state)| {
                state.generation += 1;
                let fade = if token.matches(state.category.as_deref()) {
                    state.phase = CardPhase::Entering;
                    Fade::In
                } else {
                    state.phase = CardPhase::Leaving;
                    Fade::Out
                };
                CardTransition {
                    card,
                    generation: state.generation,
                    fade,
                }
            })
            .collect();

        debug!(
            filter = token.as_str(),
            matched = transitions.iter().filter(|t| t.fade == Fade::In).count(),
            total = transitions.len(),
            "project filter selected"
        );
        self.selected = Some(token);
        transitions
    }

    /// Complete a transition. Returns `Ok(false)` if the card has been
    /// re-targeted by a later selection.
    pub fn settle(&mut self, transition: CardTransition) -> Result<bool, UiError> {
        let card = self
            .cards
            .get_mut(transition.card)
            .ok_or(UiError::UnknownCard(transition.card))?;

        if card.generation != transition.generation {
            debug!(
                card = transition.card,
                stale = transition.generation,
                current = card.generation,
                "ignoring stale card transition"
            );
            return Ok(false);
        }

        card.phase = match transition.fade {
            Fade::In => CardPhase::Shown,
            Fade::Out => CardPhase::Hidden,
        };
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;

    fn sample() -> ProjectFilter {
        ProjectFilter::new(
            ["all", "design", "dev"].map(String::from),
            ["design", "dev", "design"].map(|c| Some(c.to_owned())),
        )
    }

    fn settle_all(filter: &mut ProjectFilter, transitions: Vec<CardTransition>) {
        for t in transitions {
            filter.settle(t).unwrap();
        }
    }

    #[test]
    fn selecting_dev_shows_only_the_second_card() {
        let mut filter = sample();
        let transitions = filter.select(FilterToken::parse("dev"));
        settle_all(&mut filter, transitions);

        assert_eq!(filter.visible_cards(), vec![1]);
        assert_eq!(filter.card(0).unwrap().phase(), CardPhase::Hidden);
        assert_eq!(filter.card(1).unwrap().phase(), CardPhase::Shown);
        assert_eq!(filter.card(2).unwrap().phase(), CardPhase::Hidden);

        let active: Vec<&str> = filter
            .buttons()
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.token())
            .collect();
        assert_eq!(active, vec!["dev"]);
    }

    #[test]
    fn visibility_matches_token_for_every_category() {
        for raw in ["all", "design", "dev", "ml", ""] {
            let mut filter = sample();
            let token = FilterToken::parse(raw);
            let transitions = filter.select(token.clone());
            settle_all(&mut filter, transitions);

            for (i, card) in filter.cards().iter().enumerate() {
                let expected = raw == ALL || card.category() == Some(raw);
                assert_eq!(
                    card.phase().in_layout(),
                    expected,
                    "card {i} under filter {raw:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_token_hides_everything_and_activates_nothing() {
        let mut filter = sample();
        let transitions = filter.select(FilterToken::parse("ml"));
        settle_all(&mut filter, transitions);

        assert!(filter.visible_cards().is_empty());
        assert!(filter.buttons().iter().all(|b| !b.is_active()));
    }

    #[test]
    fn card_without_category_only_matches_all() {
        let mut filter = ProjectFilter::new(vec![], vec![None]);
        let t = filter.select(FilterToken::parse("design"));
        settle_all(&mut filter, t);
        assert!(filter.visible_cards().is_empty());

        let t = filter.select(FilterToken::All);
        settle_all(&mut filter, t);
        assert_eq!(filter.visible_cards(), vec![0]);
    }

    #[test]
    fn leaving_card_stays_in_layout_until_hide_delay() {
        let config = SiteConfig::default();
        let mut filter = sample();
        let mut tl = Timeline::new();
        for t in filter.select(FilterToken::parse("dev")) {
            tl.schedule(t.delay_ms(&config), t);
        }

        assert_eq!(filter.card(0).unwrap().phase(), CardPhase::Leaving);
        assert_eq!(filter.visible_cards(), vec![0, 1, 2]);

        for t in tl.advance(10) {
            assert!(filter.settle(t).unwrap());
        }
        assert_eq!(filter.card(1).unwrap().phase(), CardPhase::Shown);
        assert_eq!(filter.card(0).unwrap().phase(), CardPhase::Leaving);

        for t in tl.advance(190) {
            assert!(filter.settle(t).unwrap());
        }
        assert_eq!(filter.visible_cards(), vec![1]);
    }

    #[test]
    fn stale_hide_does_not_override_a_later_reveal() {
        let config = SiteConfig::default();
        let mut filter = sample();
        let mut tl = Timeline::new();

        for t in filter.select(FilterToken::parse("dev")) {
            tl.schedule(t.delay_ms(&config), t);
        }
        for t in tl.advance(50) {
            assert!(filter.settle(t).unwrap());
        }
        for t in filter.select(FilterToken::All) {
            tl.schedule(t.delay_ms(&config), t);
        }

        let mut stale = 0;
        while let Some(t) = tl.pop_until(1_000) {
            if !filter.settle(t).unwrap() {
                stale += 1;
            }
        }

        assert_eq!(stale, 2);
        assert_eq!(filter.visible_cards(), vec![0, 1, 2]);
        assert!(filter
            .cards()
            .iter()
            .all(|c| c.phase() == CardPhase::Shown));
    }

    #[test]
    fn settle_rejects_unknown_card() {
        let mut filter = sample();
        let err = filter
            .settle(CardTransition {
                card: 9,
                generation: 1,
                fade: Fade::In,
            })
            .unwrap_err();
        assert_eq!(err, UiError::UnknownCard(9));
    }

    #[test]
    fn styles_follow_phase() {
        assert_eq!(CardPhase::Hidden.style().display, Some("none"));
        assert_eq!(CardPhase::Leaving.style().display, None);
        assert_eq!(CardPhase::Leaving.style().transform, Some("scale(0.95)"));
        assert_eq!(CardPhase::Entering.style().opacity, None);
        assert_eq!(CardPhase::Shown.style().opacity, Some("1"));
    }
}
