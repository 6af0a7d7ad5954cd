//! On-demand title extraction for the current item
//!
//! Metadata parsing is a blocking, local-only engine operation with an
//! explicit start/stop lifecycle. The stop must happen on every path or the
//! engine leaks a parsing session, so the pairing is enforced with a drop
//! guard rather than sequential calls.

use tracing::warn;

use crate::engine::MediaEngine;
use crate::error::Result;

/// In-progress metadata parse; releases the engine's parse session on drop
struct ParseSession<'a, E: MediaEngine> {
    engine: &'a mut E,
}

impl<'a, E: MediaEngine> ParseSession<'a, E> {
    /// Start a local parse bounded by `timeout_ms`
    ///
    /// On error no session exists and nothing needs releasing.
    fn begin(engine: &'a mut E, timeout_ms: i32) -> Result<Self> {
        engine.parse_start(timeout_ms)?;
        Ok(Self { engine })
    }

    fn title(&self) -> Option<String> {
        self.engine.meta_title()
    }
}

impl<E: MediaEngine> Drop for ParseSession<'_, E> {
    fn drop(&mut self) {
        self.engine.parse_stop();
    }
}

/// Title of the currently loaded item
///
/// Returns an empty string when nothing is loaded, when the parse cannot be
/// started, or when the item carries no title meta field. Blocks for at most
/// the engine-enforced `timeout_ms`.
pub fn current_title<E: MediaEngine>(engine: &mut E, timeout_ms: i32) -> String {
    if engine.current_mrl().is_none() {
        return String::new();
    }

    match ParseSession::begin(engine, timeout_ms) {
        Ok(session) => session.title().unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "metadata parse not started");
            String::new()
        }
    }
}
