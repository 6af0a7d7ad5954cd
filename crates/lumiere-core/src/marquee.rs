//! Transient on-screen text over the video surface
//!
//! Feedback (title, timestamp, loop-mode) is rendered through the engine's
//! marquee overlay. The overlay has no persistent style, so every display
//! re-asserts the full parameter set before setting text. Styles are fixed
//! per message category and not configurable at this layer.

use crate::engine::{MarqueeAnchor, MediaEngine};
use crate::timecode;

/// Visual parameters for one marquee message category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeStyle {
    /// Font size
    pub size: u32,
    /// Display duration in milliseconds
    pub timeout_ms: u32,
    /// Screen anchor
    pub anchor: MarqueeAnchor,
    /// Offset from the anchor, when the category uses one
    pub offset: Option<(i32, i32)>,
}

/// Style for the media title
pub const TITLE_STYLE: MarqueeStyle = MarqueeStyle {
    size: 38,
    timeout_ms: 1500,
    anchor: MarqueeAnchor::Bottom,
    offset: None,
};

/// Style for short status text: timestamps and loop-mode changes
pub const STATUS_STYLE: MarqueeStyle = MarqueeStyle {
    size: 24,
    timeout_ms: 1500,
    anchor: MarqueeAnchor::TopRight,
    offset: Some((20, 20)),
};

/// Display `text` with the given style, re-asserting every overlay parameter
pub fn show<E: MediaEngine>(engine: &mut E, style: &MarqueeStyle, text: &str) {
    engine.marquee_enable(true);
    engine.marquee_size(style.size);
    engine.marquee_timeout_ms(style.timeout_ms);
    engine.marquee_anchor(style.anchor);
    if let Some((x, y)) = style.offset {
        engine.marquee_offset(x, y);
    }
    engine.marquee_text(text);
}

/// Display the media title
pub fn show_title<E: MediaEngine>(engine: &mut E, title: &str) {
    show(engine, &TITLE_STYLE, title);
}

/// Display `"<current>/<duration>"` for the given positions
pub fn show_timestamp<E: MediaEngine>(engine: &mut E, current_ms: i64, duration_ms: i64) {
    let text = format!(
        "{}/{}",
        timecode::format_ms(current_ms),
        timecode::format_ms(duration_ms)
    );
    show(engine, &STATUS_STYLE, &text);
}

/// Announce a playback-mode change
pub fn show_mode_change<E: MediaEngine>(engine: &mut E, label: &str) {
    show(engine, &STATUS_STYLE, label);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_fixed_per_category() {
        assert_eq!(TITLE_STYLE.size, 38);
        assert_eq!(TITLE_STYLE.timeout_ms, 1500);
        assert_eq!(TITLE_STYLE.offset, None);

        assert_eq!(STATUS_STYLE.size, 24);
        assert_eq!(STATUS_STYLE.timeout_ms, 1500);
        assert_eq!(STATUS_STYLE.anchor, MarqueeAnchor::TopRight);
        assert_eq!(STATUS_STYLE.offset, Some((20, 20)));
    }
}
