//! Lumiere Core - playback control for a desktop video player
//!
//! This crate is the control-state layer of the player, sitting between the
//! GUI shell and an opaque media engine:
//! - Playlist ownership and transport (play/pause/stop/next/previous)
//! - Seek arithmetic with end-of-media boundary policy
//! - Volume stepping with ceiling clamp
//! - Playback-mode cycling (loop all / repeat one / off)
//! - Marquee overlay protocol for transient on-screen feedback
//! - Scoped title metadata extraction
//!
//! It does no decoding, demuxing, or rendering; those belong to whatever
//! implements [`MediaEngine`].
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      GUI shell                         │
//! │        (windows, menus, shortcuts - not here)          │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//!                  ┌──────────┴──────────┐
//!                  │ PlaybackController  │
//!                  └──────────┬──────────┘
//!          ┌─────────────┬────┴─────┬─────────────┐
//!   ┌──────┴─────┐ ┌─────┴────┐ ┌───┴─────┐ ┌─────┴────┐
//!   │  timecode  │ │ marquee  │ │metadata │ │  types   │
//!   └────────────┘ └─────┬────┘ └───┬─────┘ └──────────┘
//!                        │          │
//!                  ┌─────┴──────────┴─────┐
//!                  │  MediaEngine (trait) │
//!                  │  native binding or   │
//!                  │  test double         │
//!                  └──────────────────────┘
//! ```

pub mod controller;
pub mod engine;
pub mod error;
pub mod marquee;
pub mod metadata;
pub mod timecode;
pub mod types;

pub use controller::PlaybackController;
pub use engine::{MarqueeAnchor, MediaEngine};
pub use error::{Error, Result};
pub use marquee::{MarqueeStyle, STATUS_STYLE, TITLE_STYLE};
pub use types::{ControllerConfig, ControllerId, PlaybackMode, PlaybackState, WindowHandle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the control library
pub fn init() {
    tracing::info!(version = VERSION, "Lumiere Core initialized");
}
