//! Audio thread communication types
//!
//! This module provides commands and events for the audio thread architecture:
//! - `AudioCommand` - Commands sent from UI thread to audio thread
//! - `AudioEvent` - Events sent from audio thread to UI thread
//! - `SharedPlaybackState` - Thread-safe state for non-blocking UI reads
//!
//! ## Architecture
//! ```text
//! UI Thread (AudioHandle) --[AudioCommand]--> Audio Thread (AudioPlayer)
//! UI Thread              <--[AudioEvent]---- Audio Thread
//! UI Thread              <--[SharedState]--- Audio Thread (non-blocking reads)
//! ```
//!
//! Every source is tagged with the load generation chosen by the UI, and
//! every event carries the generation it belongs to.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use super::PlaybackStatus;
use crate::cache::Asset;

// ============ Commands (UI -> Audio Thread) ============

/// Commands sent from UI thread to audio thread
pub enum AudioCommand {
    /// Replace the current source and play `data` from the start, looping
    Load {
        generation: u64,
        name: String,
        data: Asset,
        /// Start playing right away, or load paused
        autoplay: bool,
    },
    /// Pause, keeping the position
    Pause,
    /// Resume from the paused position
    Resume,
    /// Stop playback and drop the source
    Stop,
    /// Periodic tick for position sync and end detection
    Tick,
}

impl std::fmt::Debug for AudioCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load {
                generation,
                name,
                autoplay,
                ..
            } => f
                .debug_struct("Load")
                .field("generation", generation)
                .field("name", name)
                .field("autoplay", autoplay)
                .finish_non_exhaustive(),
            Self::Pause => write!(f, "Pause"),
            Self::Resume => write!(f, "Resume"),
            Self::Stop => write!(f, "Stop"),
            Self::Tick => write!(f, "Tick"),
        }
    }
}

// ============ Events (Audio Thread -> UI) ============

/// Media lifecycle notifications, in the shape of an HTML media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback was requested to start
    Play,
    /// Audio is actually flowing to the output
    Playing,
    Pause,
    /// The source ran out
    Ended,
}

/// Events emitted by the audio thread
#[derive(Debug, Clone)]
pub enum AudioEvent {
    /// Lifecycle event for the source loaded under `generation`
    Media { generation: u64, event: MediaEvent },
    /// Starting playback failed
    PlayFailed { generation: u64, error: String },
    /// Source dropped after a stop
    Emptied { generation: u64 },
    /// The output device could not be opened
    OutputUnavailable { message: String },
}

// ============ Shared State ============

#[derive(Debug, Clone)]
struct PlaybackStateInner {
    status: PlaybackStatus,
    position: Duration,
    generation: u64,
}

impl Default for PlaybackStateInner {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            position: Duration::ZERO,
            generation: 0,
        }
    }
}

/// Thread-safe shared playback state
///
/// UI thread reads this without blocking.
/// Audio thread updates it after each operation.
#[derive(Clone, Default)]
pub struct SharedPlaybackState {
    inner: Arc<RwLock<PlaybackStateInner>>,
}

impl std::fmt::Debug for SharedPlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("SharedPlaybackState")
            .field("status", &inner.status)
            .field("position", &inner.position)
            .field("generation", &inner.generation)
            .finish()
    }
}

impl SharedPlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the source loaded under `generation`, if it is current
    pub fn position_for(&self, generation: u64) -> Option<Duration> {
        let inner = self.inner.read();
        (inner.generation == generation && inner.status != PlaybackStatus::Stopped)
            .then_some(inner.position)
    }

    // ---- Update methods (called by audio thread) ----

    pub fn set_loaded(&self, generation: u64) {
        let mut inner = self.inner.write();
        inner.generation = generation;
        inner.position = Duration::ZERO;
    }

    pub fn set_status(&self, status: PlaybackStatus) {
        self.inner.write().status = status;
    }

    pub fn set_position(&self, position: Duration) {
        self.inner.write().position = position;
    }
}

// ============ Channel Types ============

/// Sender for audio commands (held by AudioHandle)
pub type AudioCommandSender = tokio::sync::mpsc::UnboundedSender<AudioCommand>;

/// Receiver for audio commands (held by audio thread)
pub type AudioCommandReceiver = tokio::sync::mpsc::UnboundedReceiver<AudioCommand>;

/// Sender for audio events (held by audio thread)
pub type AudioEventSender = tokio::sync::mpsc::UnboundedSender<AudioEvent>;

/// Receiver for audio events (held by App)
pub type AudioEventReceiver = tokio::sync::mpsc::UnboundedReceiver<AudioEvent>;

/// Create a new audio command channel
pub fn audio_command_channel() -> (AudioCommandSender, AudioCommandReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// Create a new audio event channel
pub fn audio_event_channel() -> (AudioEventSender, AudioEventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only_for_current_generation() {
        let state = SharedPlaybackState::new();
        state.set_loaded(3);
        state.set_status(PlaybackStatus::Playing);
        state.set_position(Duration::from_secs(12));

        assert_eq!(state.position_for(3), Some(Duration::from_secs(12)));
        assert_eq!(state.position_for(2), None);
    }

    #[test]
    fn test_new_source_starts_at_zero() {
        let state = SharedPlaybackState::new();
        state.set_loaded(1);
        state.set_status(PlaybackStatus::Playing);
        state.set_position(Duration::from_secs(30));

        state.set_loaded(2);
        assert_eq!(state.position_for(2), Some(Duration::ZERO));
    }

    #[test]
    fn test_stopped_has_no_position() {
        let state = SharedPlaybackState::new();
        state.set_loaded(1);
        state.set_status(PlaybackStatus::Stopped);
        assert_eq!(state.position_for(1), None);
    }
}
