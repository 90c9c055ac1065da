//! Anchor scrolling and the nav shadow.

/// Section id for an in-page anchor. `#` alone and empty hrefs are left to
/// the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Document offset to scroll to so the section clears the sticky nav.
pub fn scroll_offset(element_top: f64, page_y: f64, nav_offset: f64) -> f64 {
    element_top + page_y - nav_offset
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavShadow {
    Flat,
    Raised,
}

impl NavShadow {
    pub fn css(self) -> &'static str {
        match self {
            NavShadow::Flat => "none",
            NavShadow::Raised => "0 1px 3px rgba(0, 0, 0, 0.1)",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last_top: f64,
}

impl ScrollTracker {
    pub fn observe(&mut self, top: f64) -> NavShadow {
        self.last_top = top;
        if top > 0.0 {
            NavShadow::Raised
        } else {
            NavShadow::Flat
        }
    }

    pub fn last_top(&self) -> f64 {
        self.last_top
    }
}
