//! Song picker and playback message handlers

use iced::Task;

use crate::app::helpers::load_track;
use crate::app::message::Message;
use crate::app::state::App;
use crate::audio::AudioEvent;
use crate::features::PlaybackRequest;

use self::playback_logic::{AudioStep, FetchOutcome};

impl App {
    /// Handle picker and playback messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenSongPicker => {
                self.library.controller.open_picker();
                Some(Task::none())
            }

            Message::CloseSongPicker => {
                self.library.controller.close_picker();
                Some(Task::none())
            }

            Message::SelectTrack(index) => {
                let request = self.library.controller.select(*index);
                Some(self.dispatch_playback(request))
            }

            Message::TogglePlayback => {
                let request = self.library.controller.toggle();
                Some(self.dispatch_playback(request))
            }

            Message::ClearTrack => {
                let request = self.library.controller.clear();
                let task = self.dispatch_playback(request);
                self.sync_playing_ui();
                Some(task)
            }

            Message::TrackFetched(generation, result) => {
                let generation = *generation;
                let outcome = playback_logic::on_fetched(
                    &mut self.library.controller,
                    generation,
                    result.as_ref().map(|_| ()).map_err(String::as_str),
                    self.core.audio.is_some(),
                );

                match (outcome, result, self.core.audio_handle()) {
                    (FetchOutcome::Load { autoplay }, Ok(asset), Some(handle)) => {
                        let name = self
                            .library
                            .controller
                            .selected()
                            .map(|track| track.name.clone())
                            .unwrap_or_default();
                        handle.load(generation, &name, asset.clone(), autoplay);
                    }
                    (FetchOutcome::Discard, ..) => {
                        tracing::debug!("Discarding download for stale generation {}", generation);
                    }
                    _ => {}
                }
                self.sync_playing_ui();
                Some(Task::none())
            }

            Message::Audio(event) => {
                self.handle_audio_event(event.clone());
                Some(Task::none())
            }

            Message::AudioStreamClosed => {
                tracing::warn!("Audio event stream closed");
                self.core.audio = None;
                playback_logic::on_stream_closed(&mut self.library.controller);
                self.sync_playing_ui();
                Some(Task::none())
            }

            Message::PlaybackTick => {
                if let Some(handle) = self.core.audio_handle() {
                    handle.tick();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Forward a controller request to the audio thread
    fn dispatch_playback(&mut self, request: Option<PlaybackRequest>) -> Task<Message> {
        let step = playback_logic::plan(request, self.core.audio.is_some());
        let handle = self.core.audio_handle();

        match (step, handle) {
            (AudioStep::StopThenFetch { generation, url }, Some(handle)) => {
                // Silence the previous source while the new one downloads
                handle.stop();
                Task::perform(
                    load_track(
                        self.core.http.clone(),
                        self.core.assets.clone(),
                        url,
                        self.core.config.network.max_track_bytes,
                    ),
                    move |result| Message::TrackFetched(generation, result),
                )
            }
            (AudioStep::Pause, Some(handle)) => {
                handle.pause();
                Task::none()
            }
            (AudioStep::Resume, Some(handle)) => {
                handle.resume();
                Task::none()
            }
            (AudioStep::Stop, Some(handle)) => {
                handle.stop();
                Task::none()
            }
            (AudioStep::Unavailable, _) => {
                let generation = self.library.controller.generation();
                self.library
                    .controller
                    .on_load_failed(generation, playback_logic::AUDIO_UNAVAILABLE);
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn handle_audio_event(&mut self, event: AudioEvent) {
        let controller = &mut self.library.controller;
        match event {
            AudioEvent::Media { generation, event } => {
                tracing::debug!("Media event {:?} (generation {})", event, generation);
                controller.on_media_event(generation, event);
            }
            AudioEvent::PlayFailed { generation, error } => {
                controller.on_load_failed(generation, &error);
            }
            AudioEvent::Emptied { generation } => {
                tracing::debug!("Source for generation {} emptied", generation);
            }
            AudioEvent::OutputUnavailable { message } => {
                tracing::warn!("Playback disabled: {}", message);
            }
        }
        self.sync_playing_ui();
    }

    /// Keep the now-playing pulse in step with `is_playing`
    fn sync_playing_ui(&mut self) {
        let playing = self.library.controller.is_playing();
        self.ui.now_playing_pulse.set_active(playing);
    }
}

/// Playback decisions kept free of iced and the audio thread for testability
pub mod playback_logic {
    use crate::features::{PlaybackRequest, TrackController};

    pub const AUDIO_UNAVAILABLE: &str = "Audio thread is not running";

    /// Audio work implied by a controller request
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AudioStep {
        /// Silence the current source, then download the new one
        StopThenFetch { generation: u64, url: String },
        Pause,
        Resume,
        Stop,
        /// The request needs audio and there is no audio thread
        Unavailable,
        Nothing,
    }

    pub fn plan(request: Option<PlaybackRequest>, audio_available: bool) -> AudioStep {
        let Some(request) = request else {
            return AudioStep::Nothing;
        };
        if !audio_available {
            return match request {
                PlaybackRequest::Load { .. } | PlaybackRequest::Resume => AudioStep::Unavailable,
                PlaybackRequest::Pause | PlaybackRequest::Stop => AudioStep::Nothing,
            };
        }
        match request {
            PlaybackRequest::Load { generation, track } => AudioStep::StopThenFetch {
                generation,
                url: track.url,
            },
            PlaybackRequest::Pause => AudioStep::Pause,
            PlaybackRequest::Resume => AudioStep::Resume,
            PlaybackRequest::Stop => AudioStep::Stop,
        }
    }

    /// What to do with a finished track download
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FetchOutcome {
        /// A newer selection replaced this one
        Discard,
        /// Hand the bytes to the audio thread
        Load { autoplay: bool },
        /// Recorded as a playback failure
        Failed,
    }

    pub fn on_fetched(
        controller: &mut TrackController,
        generation: u64,
        downloaded: Result<(), &str>,
        audio_available: bool,
    ) -> FetchOutcome {
        let Some(autoplay) = controller.finish_load(generation) else {
            return FetchOutcome::Discard;
        };
        match downloaded {
            Err(e) => {
                controller.on_load_failed(generation, e);
                FetchOutcome::Failed
            }
            Ok(()) if !audio_available => {
                controller.on_load_failed(generation, AUDIO_UNAVAILABLE);
                FetchOutcome::Failed
            }
            Ok(()) => FetchOutcome::Load { autoplay },
        }
    }

    /// The audio thread is gone; whatever was playing has stopped
    pub fn on_stream_closed(controller: &mut TrackController) {
        let generation = controller.generation();
        controller.on_load_failed(generation, AUDIO_UNAVAILABLE);
    }
}

#[cfg(test)]
mod tests {
    use super::playback_logic::*;
    use crate::audio::MediaEvent;
    use crate::features::catalog::default_tracks;
    use crate::features::{PlaybackRequest, TrackController};

    fn controller() -> TrackController {
        TrackController::new(default_tracks())
    }

    #[test]
    fn switching_tracks_stops_before_fetching() {
        let mut c = controller();
        c.select(0);
        let step = plan(c.select(1), true);
        assert_eq!(
            step,
            AudioStep::StopThenFetch {
                generation: 2,
                url: default_tracks()[1].url.clone(),
            }
        );
    }

    #[test]
    fn requests_without_audio_thread() {
        let mut c = controller();
        assert_eq!(plan(c.select(0), false), AudioStep::Unavailable);
        assert_eq!(plan(Some(PlaybackRequest::Resume), false), AudioStep::Unavailable);
        assert_eq!(plan(Some(PlaybackRequest::Pause), false), AudioStep::Nothing);
        assert_eq!(plan(Some(PlaybackRequest::Stop), false), AudioStep::Nothing);
        assert_eq!(plan(None, true), AudioStep::Nothing);
    }

    #[test]
    fn stale_download_is_discarded() {
        let mut c = controller();
        c.select(0);
        let old = c.generation();
        c.select(1);

        assert_eq!(on_fetched(&mut c, old, Ok(()), true), FetchOutcome::Discard);
        let current = c.generation();
        assert_eq!(
            on_fetched(&mut c, current, Ok(()), true),
            FetchOutcome::Load { autoplay: true }
        );
    }

    #[test]
    fn pause_during_download_loads_paused() {
        let mut c = controller();
        c.select(2);
        let g = c.generation();
        assert_eq!(c.toggle(), None);
        assert_eq!(on_fetched(&mut c, g, Ok(()), true), FetchOutcome::Load { autoplay: false });
    }

    #[test]
    fn failed_download_is_a_playback_failure() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        assert_eq!(on_fetched(&mut c, g, Err("timeout"), true), FetchOutcome::Failed);
        assert!(!c.is_playing());
        assert!(!c.is_loading());
        assert_eq!(c.selected().map(|t| t.name.as_str()), Some("Indahnya Calya"));
    }

    #[test]
    fn download_without_audio_thread_fails() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        assert_eq!(on_fetched(&mut c, g, Ok(()), false), FetchOutcome::Failed);
    }

    #[test]
    fn stream_closed_resets_playing() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        on_fetched(&mut c, g, Ok(()), true);
        c.on_media_event(g, MediaEvent::Playing);
        assert!(c.is_playing());

        on_stream_closed(&mut c);
        assert!(!c.is_playing());
    }
}
