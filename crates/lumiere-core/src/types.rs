//! Core types for the playback control layer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a controller instance, used for log correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerId(pub Uuid);

impl ControllerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControllerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ControllerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playlist playback mode
///
/// Exactly one mode is active at a time. Transitions are cyclic and total:
/// every mode has a defined successor and nothing but
/// [`PlaybackController::cycle_playback_mode`](crate::PlaybackController::cycle_playback_mode)
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackMode {
    /// Loop through the whole playlist
    LoopAll,
    /// Repeat the current item
    RepeatOne,
    /// Play through once, no repeat
    Off,
}

impl PlaybackMode {
    /// Next mode in the cycle: `LoopAll -> RepeatOne -> Off -> LoopAll`
    pub fn successor(&self) -> PlaybackMode {
        match self {
            PlaybackMode::LoopAll => PlaybackMode::RepeatOne,
            PlaybackMode::RepeatOne => PlaybackMode::Off,
            PlaybackMode::Off => PlaybackMode::LoopAll,
        }
    }

    /// Fixed overlay text announced when this mode becomes active
    pub fn overlay_label(&self) -> &'static str {
        match self {
            PlaybackMode::LoopAll => "Loop: All",
            PlaybackMode::RepeatOne => "Loop: One",
            PlaybackMode::Off => "Loop: Off",
        }
    }
}

impl Default for PlaybackMode {
    fn default() -> Self {
        PlaybackMode::LoopAll
    }
}

impl std::fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackMode::LoopAll => write!(f, "loop-all"),
            PlaybackMode::RepeatOne => write!(f, "repeat-one"),
            PlaybackMode::Off => write!(f, "off"),
        }
    }
}

/// Transport state as reported by the media engine
///
/// Derived, never stored: the controller queries the engine every time rather
/// than mirroring this locally, so UI-visible state cannot drift from actual
/// engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing playing
    Stopped,
    /// Content is playing
    Playing,
    /// Playback paused
    Paused,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Stopped => write!(f, "stopped"),
            PlaybackState::Playing => write!(f, "playing"),
            PlaybackState::Paused => write!(f, "paused"),
        }
    }
}

/// Platform drawable handle the engine renders video into
///
/// Without one the engine opens its own window, so the GUI shell passes the
/// handle of its video frame widget through
/// [`PlaybackController::attach_window`](crate::PlaybackController::attach_window).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHandle {
    /// X11 window id (Linux)
    XWindow(u32),
    /// Win32 HWND (Windows)
    Hwnd(isize),
    /// NSView/NSObject pointer (macOS)
    NsObject(isize),
}

/// Controller configuration
///
/// Numeric policy knobs for seek and volume arithmetic. Marquee overlay
/// styling is deliberately absent: those parameters are fixed per message
/// category and live in [`crate::marquee`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Seek step for fast-forward/back-forward (milliseconds)
    pub seek_step_ms: i64,
    /// Fast-forward is a no-op when closer than this to end of media (ms)
    pub end_guard_ms: i64,
    /// Fast-forward skips to the next item when within this of the end (ms)
    pub end_skip_ms: i64,
    /// Volume adjustment step
    pub volume_step: i32,
    /// Volume ceiling; volume-up never pushes past this
    pub volume_ceiling: i32,
    /// Timeout handed to the engine's local metadata parse (milliseconds)
    pub metadata_timeout_ms: i32,
}

impl ControllerConfig {
    /// Reject configurations the seek/volume arithmetic cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if self.seek_step_ms <= 0 {
            return Err(crate::Error::InvalidConfig(format!(
                "seek_step_ms must be positive, got {}",
                self.seek_step_ms
            )));
        }
        if self.volume_step <= 0 {
            return Err(crate::Error::InvalidConfig(format!(
                "volume_step must be positive, got {}",
                self.volume_step
            )));
        }
        if self.volume_ceiling < self.volume_step {
            return Err(crate::Error::InvalidConfig(format!(
                "volume_ceiling {} is below volume_step {}",
                self.volume_ceiling, self.volume_step
            )));
        }
        if self.end_guard_ms < 0 || self.end_skip_ms < 0 {
            return Err(crate::Error::InvalidConfig(
                "end-of-media windows must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            seek_step_ms: 10_000,
            end_guard_ms: 130,
            end_skip_ms: 120,
            volume_step: 5,
            volume_ceiling: 195,
            metadata_timeout_ms: 5_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_is_total_and_returns_after_three() {
        let start = PlaybackMode::LoopAll;
        assert_eq!(start.successor(), PlaybackMode::RepeatOne);
        assert_eq!(start.successor().successor(), PlaybackMode::Off);
        assert_eq!(start.successor().successor().successor(), start);

        // every mode has a successor distinct from itself
        for mode in [PlaybackMode::LoopAll, PlaybackMode::RepeatOne, PlaybackMode::Off] {
            assert_ne!(mode.successor(), mode);
        }
    }

    #[test]
    fn mode_overlay_labels() {
        assert_eq!(PlaybackMode::LoopAll.overlay_label(), "Loop: All");
        assert_eq!(PlaybackMode::RepeatOne.overlay_label(), "Loop: One");
        assert_eq!(PlaybackMode::Off.overlay_label(), "Loop: Off");
    }

    #[test]
    fn initial_mode_is_loop_all() {
        assert_eq!(PlaybackMode::default(), PlaybackMode::LoopAll);
    }

    #[test]
    fn config_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.seek_step_ms, 10_000);
        assert_eq!(config.end_guard_ms, 130);
        assert_eq!(config.end_skip_ms, 120);
        assert_eq!(config.volume_step, 5);
        assert_eq!(config.volume_ceiling, 195);
    }

    #[test]
    fn config_validation() {
        assert!(ControllerConfig::default().validate().is_ok());

        let zero_step = ControllerConfig {
            volume_step: 0,
            ..Default::default()
        };
        assert!(zero_step.validate().is_err());

        let negative_seek = ControllerConfig {
            seek_step_ms: -1,
            ..Default::default()
        };
        assert!(negative_seek.validate().is_err());
    }

    #[test]
    fn config_roundtrips_through_serde() {
        let config = ControllerConfig {
            seek_step_ms: 5_000,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ControllerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seek_step_ms, 5_000);
        assert_eq!(back.volume_ceiling, 195);
    }
}
