//! Basic playback example
//!
//! Walks the playback controller through a playlist using an in-memory
//! engine, so it runs without any native media backend installed.
//!
//! Run with: cargo run -p lumiere-core --example basic_playback

use anyhow::Result;
use lumiere_core::{
    timecode, MarqueeAnchor, MediaEngine, PlaybackController, PlaybackMode, PlaybackState,
};

/// In-memory engine: enough state to answer every query the controller makes
struct DemoEngine {
    playlist: Vec<String>,
    cursor: usize,
    state: PlaybackState,
    time_ms: i64,
    length_ms: i64,
    volume: i32,
    muted: bool,
    scale: f32,
    title: Option<String>,
}

impl DemoEngine {
    fn new() -> Self {
        Self {
            playlist: Vec::new(),
            cursor: 0,
            state: PlaybackState::Stopped,
            time_ms: 0,
            length_ms: 5_400_000, // pretend every item is 90 minutes
            volume: 100,
            muted: false,
            scale: 0.0,
            title: Some("Voyage dans la Lune".to_string()),
        }
    }
}

impl MediaEngine for DemoEngine {
    fn playlist_append(&mut self, mrl: &str) {
        self.playlist.push(mrl.to_string());
    }

    fn playlist_len(&self) -> usize {
        self.playlist.len()
    }

    fn play(&mut self) {
        if !self.playlist.is_empty() {
            self.state = PlaybackState::Playing;
        }
    }

    fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    fn toggle_pause(&mut self) {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Stopped => PlaybackState::Stopped,
        };
    }

    fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
        }
    }

    fn next(&mut self) -> bool {
        if self.cursor + 1 < self.playlist.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn previous(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn set_playback_mode(&mut self, _mode: PlaybackMode) {}

    fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn attach_window(&mut self, _handle: lumiere_core::WindowHandle) -> lumiere_core::Result<()> {
        Ok(())
    }

    fn time_ms(&self) -> i64 {
        self.time_ms
    }

    fn set_time_ms(&mut self, time_ms: i64) {
        self.time_ms = time_ms;
    }

    fn length_ms(&self) -> i64 {
        self.length_ms
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, 200);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn next_frame(&mut self) {
        self.time_ms += 40; // one frame at 25 fps
    }

    fn video_scale(&self) -> f32 {
        self.scale
    }

    fn set_video_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn current_mrl(&self) -> Option<String> {
        self.playlist.get(self.cursor).cloned()
    }

    fn marquee_enable(&mut self, _enabled: bool) {}

    fn marquee_size(&mut self, _size: u32) {}

    fn marquee_timeout_ms(&mut self, _timeout_ms: u32) {}

    fn marquee_anchor(&mut self, _anchor: MarqueeAnchor) {}

    fn marquee_offset(&mut self, _x: i32, _y: i32) {}

    fn marquee_text(&mut self, text: &str) {
        println!("  [marquee] {text}");
    }

    fn parse_start(&mut self, _timeout_ms: i32) -> lumiere_core::Result<()> {
        Ok(())
    }

    fn parse_stop(&mut self) {}

    fn meta_title(&self) -> Option<String> {
        self.title.clone()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    lumiere_core::init();

    println!("Lumiere Core - Basic Playback Example");
    println!("=====================================\n");

    let mut player = PlaybackController::new(DemoEngine::new());

    println!("Adding media:");
    player.add_media(["/videos/voyage.mkv", "/videos/general.mp4"]);
    println!("  - playlist length: {}\n", player.playlist_len());

    println!("Transport:");
    player.play();
    println!("  - state after play: {}", player.state());
    player.toggle_pause();
    println!("  - state after pause: {}", player.state());
    player.resume();
    println!("  - state after resume: {}\n", player.state());

    println!("Seeking (duration {}):", player.duration_display());
    player.set_time(50_000);
    player.fast_forward();
    println!("  - after fast forward: {}", timecode::format_ms(player.current_time_ms()));
    player.back_forward();
    println!("  - after back forward: {}\n", timecode::format_ms(player.current_time_ms()));

    println!("Volume:");
    player.volume_up();
    player.volume_up();
    player.volume_down();
    println!("  - volume after up/up/down: {}\n", player.engine().volume());

    println!("Playback modes:");
    for _ in 0..3 {
        player.cycle_playback_mode();
        println!("  - mode: {}", player.playback_mode());
    }
    println!();

    println!("Metadata:");
    println!("  - current title: {:?}", player.title());

    Ok(())
}
