//! Media engine capability trait
//!
//! The decode/render/audio engine is an opaque collaborator. This trait names
//! exactly the capabilities the control layer consumes, so a concrete native
//! binding (or a test double) substitutes behind it without the controller
//! knowing which.
//!
//! All methods are synchronous: the control layer runs on the thread that
//! owns the GUI event loop and never spawns work of its own. Whatever the
//! engine does asynchronously underneath (decode, actual seeking) is its own
//! business; from here, transport calls are fire-and-forget.

use crate::error::Result;
use crate::types::{PlaybackMode, PlaybackState, WindowHandle};

/// Screen anchor for the marquee overlay
///
/// Raw codes follow the common logo/marquee position convention of native
/// media engines (bit 2 = top, bit 3 = bottom, bits 0-1 = left/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeAnchor {
    Center,
    Left,
    Right,
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
}

impl MarqueeAnchor {
    /// Native position code for this anchor
    pub fn raw(&self) -> u32 {
        match self {
            MarqueeAnchor::Center => 0,
            MarqueeAnchor::Left => 1,
            MarqueeAnchor::Right => 2,
            MarqueeAnchor::Top => 4,
            MarqueeAnchor::TopLeft => 5,
            MarqueeAnchor::TopRight => 6,
            MarqueeAnchor::Bottom => 8,
            MarqueeAnchor::BottomLeft => 9,
            MarqueeAnchor::BottomRight => 10,
        }
    }
}

/// Capabilities the control layer requires from the media engine
///
/// Grouped the way a list-player engine exposes them: a playlist container,
/// list-level transport, current-item access, the marquee overlay, and
/// on-demand metadata parsing.
///
/// The engine is expected to no-op safely on invalid-state transport calls
/// (`pause` while stopped and the like); this layer adds no preconditions.
pub trait MediaEngine {
    // ---- playlist container ----

    /// Append one item, by MRL, to the end of the playlist
    fn playlist_append(&mut self, mrl: &str);

    /// Number of items currently in the playlist
    fn playlist_len(&self) -> usize;

    // ---- list-player transport ----

    /// Start playing the playlist
    fn play(&mut self);

    /// Stop playback
    fn stop(&mut self);

    /// Toggle between paused and resumed
    fn toggle_pause(&mut self);

    /// Explicitly leave pause, regardless of current state
    fn resume(&mut self);

    /// Advance to the next playlist item; false when there is none
    fn next(&mut self) -> bool;

    /// Retreat to the previous playlist item; false when there is none
    fn previous(&mut self) -> bool;

    /// Set how the engine traverses the playlist
    fn set_playback_mode(&mut self, mode: PlaybackMode);

    /// Whether the engine is currently playing
    fn is_playing(&self) -> bool;

    /// Current transport state
    fn state(&self) -> PlaybackState;

    /// Bind video output to a platform drawable
    fn attach_window(&mut self, handle: WindowHandle) -> Result<()>;

    // ---- current item ----

    /// Playback position of the current item in milliseconds
    fn time_ms(&self) -> i64;

    /// Set the playback position in milliseconds
    fn set_time_ms(&mut self, time_ms: i64);

    /// Length of the current item in milliseconds (0 when nothing loaded)
    fn length_ms(&self) -> i64;

    /// Current software volume
    fn volume(&self) -> i32;

    /// Set the software volume
    fn set_volume(&mut self, volume: i32);

    /// Current mute flag
    fn is_muted(&self) -> bool;

    /// Set the mute flag
    fn set_muted(&mut self, muted: bool);

    /// Advance exactly one video frame (engine precondition: paused)
    fn next_frame(&mut self);

    /// Current video scale factor; 0.0 means fit-to-window
    fn video_scale(&self) -> f32;

    /// Set the video scale factor
    fn set_video_scale(&mut self, scale: f32);

    /// MRL of the currently loaded item, if any
    fn current_mrl(&self) -> Option<String>;

    // ---- marquee overlay ----
    //
    // The overlay keeps no style state across displays, so every caller must
    // re-assert all parameters before setting text.

    /// Enable or disable the marquee overlay
    fn marquee_enable(&mut self, enabled: bool);

    /// Set the marquee font size
    fn marquee_size(&mut self, size: u32);

    /// Set how long the marquee stays visible, in milliseconds
    fn marquee_timeout_ms(&mut self, timeout_ms: u32);

    /// Set the marquee screen anchor
    fn marquee_anchor(&mut self, anchor: MarqueeAnchor);

    /// Set the marquee x/y offset from its anchor
    fn marquee_offset(&mut self, x: i32, y: i32);

    /// Set the marquee text, displaying it with the parameters asserted above
    fn marquee_text(&mut self, text: &str);

    // ---- metadata ----

    /// Start a local (non-network) metadata parse of the current item
    ///
    /// `timeout_ms` bounds the parse; a negative value means the engine's
    /// default. Must be paired with [`parse_stop`](Self::parse_stop).
    fn parse_start(&mut self, timeout_ms: i32) -> Result<()>;

    /// Stop an in-progress metadata parse and release its resources
    fn parse_stop(&mut self);

    /// Title meta field of the current item, if the parse produced one
    fn meta_title(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_raw_codes() {
        assert_eq!(MarqueeAnchor::Center.raw(), 0);
        assert_eq!(MarqueeAnchor::TopRight.raw(), 6);
        assert_eq!(MarqueeAnchor::Bottom.raw(), 8);
        assert_eq!(MarqueeAnchor::BottomRight.raw(), 10);
    }
}
