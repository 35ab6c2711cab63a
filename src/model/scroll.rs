//! Scroll-linked header appearance
//!
//! The playlist header collapses as its list scrolls. Everything here is a
//! pure function of the scroll offset (in rows) and the expanded header
//! height `H`.

/// Title appears once the ratio passes this.
const TITLE_THRESHOLD: f32 = 0.6;
const MAX_SCROLLING_OPACITY: f32 = 0.9;

/// `clamp(offset / (H * 0.6), 0, 1)`
pub fn collapse_ratio(offset: u16, header_height: u16) -> f32 {
    if header_height == 0 {
        return 1.0;
    }
    // offset / (H * 3/5), kept in integers so offset == 0.6H lands on 1.0 exactly
    let ratio = (u32::from(offset) * 5) as f32 / (u32::from(header_height) * 3) as f32;
    ratio.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderAppearance {
    pub ratio: f32,
    pub title_visible: bool,
    /// App-bar background opacity in [0, 1].
    pub background_opacity: f32,
}

impl HeaderAppearance {
    pub fn from_offset(offset: u16, header_height: u16) -> Self {
        let ratio = collapse_ratio(offset, header_height);
        // Once the header has scrolled out entirely the bar goes opaque.
        let background_opacity = if offset >= header_height {
            1.0
        } else {
            ratio * MAX_SCROLLING_OPACITY
        };
        Self {
            ratio,
            title_visible: ratio > TITLE_THRESHOLD,
            background_opacity,
        }
    }
}

/// Offset that keeps content row `row` inside a viewport of `viewport` rows.
pub fn follow_row(current: u16, row: u16, viewport: u16) -> u16 {
    if viewport == 0 {
        return current;
    }
    if row < current {
        row
    } else if row >= current.saturating_add(viewport) {
        row - viewport + 1
    } else {
        current
    }
}
