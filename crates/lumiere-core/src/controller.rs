//! Playback controller - single entry point for transport and playlist control
//!
//! The GUI layer calls these operations in response to user input; everything
//! here mutates or queries the engine and, where feedback is useful, pushes a
//! marquee overlay. Transport state lives in the engine and is queried fresh
//! on every call; the only state owned locally is the playback mode and the
//! configuration.

use tracing::{debug, info};

use crate::engine::MediaEngine;
use crate::error::Result;
use crate::marquee;
use crate::metadata;
use crate::timecode;
use crate::types::{ControllerConfig, ControllerId, PlaybackMode, PlaybackState, WindowHandle};

/// Authoritative front door for all transport and playlist operations
pub struct PlaybackController<E: MediaEngine> {
    /// Unique controller ID, for log correlation
    id: ControllerId,
    /// Numeric seek/volume policy
    config: ControllerConfig,
    /// Active playlist traversal mode
    mode: PlaybackMode,
    /// The opaque media engine
    engine: E,
}

impl<E: MediaEngine> PlaybackController<E> {
    /// Create a controller with default configuration
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, ControllerConfig::default())
    }

    /// Create a controller with explicit configuration
    pub fn with_config(mut engine: E, config: ControllerConfig) -> Self {
        let id = ControllerId::new();
        let mode = PlaybackMode::default();

        engine.set_playback_mode(mode);

        info!(controller_id = %id, mode = %mode, "playback controller created");

        Self {
            id,
            config,
            mode,
            engine,
        }
    }

    /// Controller ID
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Active configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Active playlist traversal mode
    pub fn playback_mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Borrow the underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the underlying engine
    ///
    /// Escape hatch for engine capabilities this layer does not wrap, such as
    /// engine-specific event subscription.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // ---- playlist ----

    /// Append items to the playlist in the order given
    ///
    /// No dedup and no existence check; the engine surfaces per-item load
    /// failures through its own event channel.
    pub fn add_media<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0usize;
        for item in items {
            self.engine.playlist_append(item.as_ref());
            added += 1;
        }
        debug!(controller_id = %self.id, added, total = self.engine.playlist_len(), "media added");
    }

    /// Number of items in the playlist
    pub fn playlist_len(&self) -> usize {
        self.engine.playlist_len()
    }

    // ---- transport ----

    /// Start playing the playlist
    pub fn play(&mut self) {
        debug!(controller_id = %self.id, "play");
        self.engine.play();
    }

    /// Stop playback
    pub fn stop(&mut self) {
        debug!(controller_id = %self.id, "stop");
        self.engine.stop();
    }

    /// Toggle between paused and resumed
    pub fn toggle_pause(&mut self) {
        debug!(controller_id = %self.id, "toggle pause");
        self.engine.toggle_pause();
    }

    /// Explicitly resume, regardless of current state
    pub fn resume(&mut self) {
        debug!(controller_id = %self.id, "resume");
        self.engine.resume();
    }

    /// Advance to the next playlist item; false at the end of the list
    pub fn next(&mut self) -> bool {
        let ok = self.engine.next();
        debug!(controller_id = %self.id, ok, "next item");
        ok
    }

    /// Retreat to the previous playlist item; false at the start of the list
    pub fn previous(&mut self) -> bool {
        let ok = self.engine.previous();
        debug!(controller_id = %self.id, ok, "previous item");
        ok
    }

    /// Whether the engine is currently playing
    pub fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }

    /// Current transport state, queried fresh from the engine
    pub fn state(&self) -> PlaybackState {
        self.engine.state()
    }

    /// Advance exactly one video frame (meaningful only while paused)
    pub fn next_frame(&mut self) {
        self.engine.next_frame();
    }

    // ---- volume ----

    /// Raise the volume by one step, never past the ceiling
    pub fn volume_up(&mut self) {
        let current = self.engine.volume();
        if current <= self.config.volume_ceiling - self.config.volume_step {
            let target = current + self.config.volume_step;
            debug!(controller_id = %self.id, from = current, to = target, "volume up");
            self.engine.set_volume(target);
        }
    }

    /// Lower the volume by one step
    ///
    /// The guard is `current >= 0`, not a strict floor: a decrement from 0
    /// still reaches the engine, whose own clamp is the floor. The ceiling,
    /// by contrast, is enforced here.
    pub fn volume_down(&mut self) {
        let current = self.engine.volume();
        if current >= 0 {
            let target = current - self.config.volume_step;
            debug!(controller_id = %self.id, from = current, to = target, "volume down");
            self.engine.set_volume(target);
        }
    }

    /// Flip the mute flag
    pub fn toggle_mute(&mut self) {
        let muted = self.engine.is_muted();
        self.engine.set_muted(!muted);
    }

    // ---- time & seeking ----

    /// Playback position of the current item in milliseconds
    pub fn current_time_ms(&self) -> i64 {
        self.engine.time_ms()
    }

    /// Length of the current item in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.engine.length_ms()
    }

    /// Length of the current item as display text
    pub fn duration_display(&self) -> String {
        timecode::format_ms(self.engine.length_ms())
    }

    /// Set the absolute position without clamping
    ///
    /// Callers are responsible for range checks; [`fast_forward`](Self::fast_forward)
    /// and [`back_forward`](Self::back_forward) are the canonical clamped callers.
    pub fn set_time(&mut self, time_ms: i64) {
        self.engine.set_time_ms(time_ms);
    }

    /// Seek one step forward, with end-of-media policy
    ///
    /// Too close to the end to act safely: no-op. Within one skip window of
    /// the end: advance to the next item instead of seeking past it.
    /// Otherwise seek ahead and surface a timestamp overlay.
    pub fn fast_forward(&mut self) {
        let duration = self.engine.length_ms();
        let time = self.engine.time_ms();

        if time + self.config.end_guard_ms > duration {
            debug!(controller_id = %self.id, time, duration, "fast forward ignored near end");
        } else if time + self.config.end_skip_ms >= duration {
            self.next();
        } else {
            let target = time + self.config.seek_step_ms;
            debug!(controller_id = %self.id, from = time, to = target, "fast forward");
            self.engine.set_time_ms(target);
            self.show_timestamp();
        }
    }

    /// Seek one step backward, clamped at zero
    pub fn back_forward(&mut self) {
        let time = self.engine.time_ms();
        let target = time - self.config.seek_step_ms;

        if target < 0 {
            self.engine.set_time_ms(0);
        } else {
            debug!(controller_id = %self.id, from = time, to = target, "back forward");
            self.engine.set_time_ms(target);
            self.show_timestamp();
        }
    }

    // ---- playback mode ----

    /// Advance to the next playlist traversal mode and announce it
    pub fn cycle_playback_mode(&mut self) {
        let from = self.mode;
        self.mode = from.successor();

        self.engine.set_playback_mode(self.mode);
        marquee::show_mode_change(&mut self.engine, self.mode.overlay_label());

        info!(controller_id = %self.id, from = %from, to = %self.mode, "playback mode changed");
    }

    // ---- video surface ----

    /// Toggle the video scale between fit-to-window and native size
    pub fn toggle_video_scale(&mut self) {
        if self.engine.video_scale() == 0.0 {
            self.engine.set_video_scale(1.0);
        } else {
            self.engine.set_video_scale(0.0);
        }
    }

    /// Bind the engine's video output to a platform drawable
    pub fn attach_window(&mut self, handle: WindowHandle) -> Result<()> {
        info!(controller_id = %self.id, ?handle, "attaching video output");
        self.engine.attach_window(handle)
    }

    // ---- metadata & overlays ----

    /// Title of the currently loaded item; empty when nothing is loaded
    pub fn title(&mut self) -> String {
        metadata::current_title(&mut self.engine, self.config.metadata_timeout_ms)
    }

    /// Surface the current item's title as an overlay
    ///
    /// Suitable for binding to the engine's media-changed notification.
    pub fn show_title(&mut self) {
        let title = self.title();
        marquee::show_title(&mut self.engine, &title);
    }

    /// Surface `"<current>/<duration>"` as an overlay
    pub fn show_timestamp(&mut self) {
        let time = self.engine.time_ms();
        let duration = self.engine.length_ms();
        marquee::show_timestamp(&mut self.engine, time, duration);
    }
}
