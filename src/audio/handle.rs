//! Audio handle for non-blocking audio control from UI thread
//!
//! `AudioHandle` provides a non-blocking interface to control audio playback.
//! All methods send commands to the audio thread and return immediately.
//! State is read from `SharedPlaybackState` without blocking.

use std::time::Duration;

use super::events::{AudioCommand, AudioCommandSender, SharedPlaybackState};
use crate::cache::Asset;

/// Handle for controlling audio from UI thread
///
/// Results are communicated via `AudioEvent`. If the audio thread has
/// exited, commands are dropped silently.
#[derive(Clone)]
pub struct AudioHandle {
    command_tx: AudioCommandSender,
    state: SharedPlaybackState,
}

impl std::fmt::Debug for AudioHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioHandle")
            .field("state", &self.state)
            .finish()
    }
}

impl AudioHandle {
    pub fn new(command_tx: AudioCommandSender, state: SharedPlaybackState) -> Self {
        Self { command_tx, state }
    }

    fn send(&self, command: AudioCommand) {
        if self.command_tx.send(command).is_err() {
            tracing::warn!("Audio thread is gone, command dropped");
        }
    }

    // ============ Playback Control ============

    /// Load `data` from the start under `generation`
    ///
    /// With `autoplay`, listen for `MediaEvent::Playing` or
    /// `AudioEvent::PlayFailed`. Without it the source waits for `resume`.
    pub fn load(&self, generation: u64, name: &str, data: Asset, autoplay: bool) {
        self.send(AudioCommand::Load {
            generation,
            name: name.to_string(),
            data,
            autoplay,
        });
    }

    pub fn pause(&self) {
        self.send(AudioCommand::Pause);
    }

    pub fn resume(&self) {
        self.send(AudioCommand::Resume);
    }

    /// Stop playback and drop the source
    pub fn stop(&self) {
        self.send(AudioCommand::Stop);
    }

    /// Tick handler - syncs position and detects the end of the source
    pub fn tick(&self) {
        self.send(AudioCommand::Tick);
    }

    // ============ State Queries (non-blocking reads) ============

    /// Position of the source loaded under `generation`
    pub fn position_for(&self, generation: u64) -> Option<Duration> {
        self.state.position_for(generation)
    }
}
