//! Audio thread implementation
//!
//! This module runs the AudioPlayer in a dedicated thread, processing
//! commands from the UI thread and sending events back.
//!
//! If no output device can be opened the thread keeps running and answers
//! every autoplay load or resume with `AudioEvent::PlayFailed`.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::PlaybackStatus;
use super::events::{
    AudioCommand, AudioCommandReceiver, AudioEvent, AudioEventReceiver, AudioEventSender,
    MediaEvent, SharedPlaybackState, audio_command_channel, audio_event_channel,
};
use super::handle::AudioHandle;
use super::player::AudioPlayer;

const NO_OUTPUT: &str = "No audio output device";

pub struct AudioThreadHandle {
    pub handle: AudioHandle,
    event_rx: Option<AudioEventReceiver>,
    thread_handle: Option<JoinHandle<()>>,
}

impl AudioThreadHandle {
    pub fn take_event_rx(&mut self) -> Option<AudioEventReceiver> {
        self.event_rx.take()
    }

    pub fn is_running(&self) -> bool {
        self.thread_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl std::fmt::Debug for AudioThreadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioThreadHandle")
            .field("handle", &self.handle)
            .field("running", &self.is_running())
            .finish()
    }
}

impl Drop for AudioThreadHandle {
    fn drop(&mut self) {
        self.handle.stop();
    }
}

/// Spawn the audio thread
///
/// Creates an AudioPlayer in a dedicated thread and returns handles for
/// communication. The thread exits once every `AudioHandle` is dropped.
pub fn spawn_audio_thread(volume: f32) -> Result<AudioThreadHandle, String> {
    let (command_tx, command_rx) = audio_command_channel();
    let (event_tx, event_rx) = audio_event_channel();

    let state = SharedPlaybackState::new();
    let state_clone = state.clone();

    let handle = AudioHandle::new(command_tx, state);

    let thread_handle = thread::Builder::new()
        .name("audio-player".to_string())
        .spawn(move || {
            // The output stream is not Send, so the player lives here
            let player = match AudioPlayer::new(volume) {
                Ok(player) => Some(player),
                Err(e) => {
                    tracing::error!("Failed to create audio player: {}", e);
                    let _ = event_tx.send(AudioEvent::OutputUnavailable { message: e });
                    None
                }
            };
            audio_thread_main(player, command_rx, event_tx, state_clone);
        })
        .map_err(|e| format!("Failed to spawn audio thread: {}", e))?;

    Ok(AudioThreadHandle {
        handle,
        event_rx: Some(event_rx),
        thread_handle: Some(thread_handle),
    })
}

/// Main loop for the audio thread
///
/// Blocks on `command_rx.blocking_recv()` until the channel closes.
fn audio_thread_main(
    mut player: Option<AudioPlayer>,
    mut command_rx: AudioCommandReceiver,
    event_tx: AudioEventSender,
    state: SharedPlaybackState,
) {
    tracing::info!("Audio thread started");

    // Generation of the most recently loaded source
    let mut generation = 0u64;

    let media = |generation: u64, event: MediaEvent| {
        let _ = event_tx.send(AudioEvent::Media { generation, event });
    };
    let failed = |generation: u64, error: String| {
        let _ = event_tx.send(AudioEvent::PlayFailed { generation, error });
    };

    while let Some(cmd) = command_rx.blocking_recv() {
        match cmd {
            AudioCommand::Load {
                generation: load_generation,
                name,
                data,
                autoplay,
            } => {
                generation = load_generation;
                state.set_loaded(generation);

                match player.as_mut() {
                    Some(player) => {
                        tracing::info!("Loading '{}' ({} bytes)", name, data.len());
                        if autoplay {
                            media(generation, MediaEvent::Play);
                        }
                        match player.load(data, autoplay) {
                            Ok(()) if autoplay => media(generation, MediaEvent::Playing),
                            Ok(()) => {}
                            Err(e) => {
                                tracing::error!("Failed to load '{}': {}", name, e);
                                failed(generation, e);
                            }
                        }
                    }
                    None if autoplay => failed(generation, NO_OUTPUT.to_string()),
                    None => tracing::debug!("No output, '{}' not loaded", name),
                }
            }

            AudioCommand::Pause => {
                if let Some(player) = player.as_mut()
                    && player.pause()
                {
                    media(generation, MediaEvent::Pause);
                }
            }

            AudioCommand::Resume => match player.as_mut().map(AudioPlayer::resume) {
                Some(true) => {
                    media(generation, MediaEvent::Play);
                    media(generation, MediaEvent::Playing);
                }
                Some(false) => failed(generation, "Nothing is loaded".to_string()),
                None => failed(generation, NO_OUTPUT.to_string()),
            },

            AudioCommand::Stop => {
                if let Some(player) = player.as_mut()
                    && player.has_source()
                {
                    let was_playing = player.get_info().status == PlaybackStatus::Playing;
                    player.stop();
                    if was_playing {
                        media(generation, MediaEvent::Pause);
                    }
                    let _ = event_tx.send(AudioEvent::Emptied { generation });
                }
            }

            AudioCommand::Tick => {
                if let Some(player) = player.as_mut()
                    && player.is_finished()
                {
                    tracing::warn!("Source for generation {} ran dry", generation);
                    player.finish();
                    media(generation, MediaEvent::Ended);
                }
            }
        }

        sync_state(player.as_ref(), &state);
    }

    tracing::info!("Audio thread exiting (command channel closed)");
}

fn sync_state(player: Option<&AudioPlayer>, state: &SharedPlaybackState) {
    match player {
        Some(player) => {
            let info = player.get_info();
            state.set_status(info.status);
            state.set_position(info.position);
        }
        None => {
            state.set_status(PlaybackStatus::Stopped);
            state.set_position(Duration::ZERO);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Asset;

    fn load(generation: u64, autoplay: bool) -> AudioCommand {
        AudioCommand::Load {
            generation,
            name: "Monolog".to_string(),
            data: Asset::from(vec![0; 16]),
            autoplay,
        }
    }

    /// Drive the loop with no output device until the command channel closes
    fn run_without_output(commands: Vec<AudioCommand>) -> (Vec<AudioEvent>, SharedPlaybackState) {
        let (command_tx, command_rx) = audio_command_channel();
        let (event_tx, mut event_rx) = audio_event_channel();
        let state = SharedPlaybackState::new();
        let thread_state = state.clone();

        let thread =
            thread::spawn(move || audio_thread_main(None, command_rx, event_tx, thread_state));
        for command in commands {
            command_tx.send(command).unwrap();
        }
        drop(command_tx);
        thread.join().unwrap();

        let mut events = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            events.push(event);
        }
        (events, state)
    }

    #[test]
    fn test_load_without_output_fails_for_its_generation() {
        let (events, state) = run_without_output(vec![load(4, true)]);

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AudioEvent::PlayFailed { generation: 4, .. }));

        // The snapshot moved to the new generation, at the start
        state.set_status(PlaybackStatus::Playing);
        assert_eq!(state.position_for(4), Some(Duration::ZERO));
        assert_eq!(state.position_for(3), None);
    }

    #[test]
    fn test_paused_load_without_output_reports_nothing() {
        let (events, _) = run_without_output(vec![load(2, false)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_resume_without_output_fails() {
        let (events, _) = run_without_output(vec![load(2, false), AudioCommand::Resume]);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AudioEvent::PlayFailed { generation: 2, .. }));
    }

    #[test]
    fn test_pause_and_stop_without_source_are_silent() {
        let (events, state) = run_without_output(vec![
            AudioCommand::Pause,
            AudioCommand::Stop,
            AudioCommand::Tick,
        ]);
        assert!(events.is_empty());
        assert_eq!(state.position_for(0), None);
    }

    #[test]
    fn test_thread_exits_when_commands_close() {
        let (events, _) = run_without_output(Vec::new());
        assert!(events.is_empty());
    }
}
