use crate::constants::{NAVBAR_SCROLLED_PX, SCROLL_SPY_OFFSET_PX};

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    /// Document-relative top in CSS pixels.
    pub top: f64,
}

/// Picks the section whose top has scrolled past the offset line.
#[derive(Clone, Debug, Default)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    offset: f64,
}

impl ScrollSpy {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            offset: SCROLL_SPY_OFFSET_PX,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Last section in document order whose `top - offset <= scroll_y`.
    pub fn active(&self, scroll_y: f64) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|s| s.top - self.offset <= scroll_y)
            .map(|s| s.id.as_str())
    }
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}

/// Section id targeted by an in-page link such as `#about`.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
