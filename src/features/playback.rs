//! Track selection and playback state
//!
//! `TrackController` holds the selection state and turns user intents into
//! `PlaybackRequest`s for the audio thread. Whether audio is actually playing
//! is never assumed from a request; it mirrors the media events the audio
//! thread reports for the current load generation.
//!
//! Between a selection and the arrival of its bytes there is no source yet.
//! A toggle in that window only flips whether the source starts playing
//! once it is loaded.

use crate::audio::MediaEvent;

use super::catalog::Track;

/// Command the app should forward to the audio handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackRequest {
    /// Drop the current source, then fetch and play `track` from the start
    Load { generation: u64, track: Track },
    Pause,
    Resume,
    /// Stop playback and clear the source
    Stop,
}

/// Selection state for the song picker and the playback toggle
#[derive(Debug, Clone, Default)]
pub struct TrackController {
    tracks: Vec<Track>,
    selected: Option<Track>,
    is_playing: bool,
    picker_open: bool,
    /// Bumped on every selection; identifies the current source
    generation: u64,
    /// Set while the selected track is downloading
    pending: Option<PendingLoad>,
}

/// A selection whose bytes have not reached the audio thread yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLoad {
    autoplay: bool,
}

impl TrackController {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            ..Default::default()
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn selected(&self) -> Option<&Track> {
        self.selected.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the selected track is still downloading
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the toggle should offer to pause
    ///
    /// While loading this follows the requested start state, since no media
    /// event exists yet for the new source.
    pub fn wants_playback(&self) -> bool {
        match self.pending {
            Some(pending) => pending.autoplay,
            None => self.is_playing,
        }
    }

    /// Whether `generation` still names the active source
    pub fn is_current(&self, generation: u64) -> bool {
        self.selected.is_some() && generation == self.generation
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Select the track at `index`, closing the picker
    ///
    /// Selecting again (even the same track) replaces the source and starts
    /// from the beginning.
    pub fn select(&mut self, index: usize) -> Option<PlaybackRequest> {
        let track = self.tracks.get(index)?.clone();
        self.picker_open = false;
        self.generation += 1;
        self.selected = Some(track.clone());
        // Nothing has been reported for the new source yet
        self.is_playing = false;
        self.pending = Some(PendingLoad { autoplay: true });
        tracing::info!("Selected track '{}' (generation {})", track.name, self.generation);
        Some(PlaybackRequest::Load {
            generation: self.generation,
            track,
        })
    }

    /// Flip between pause and resume; does nothing without a selection
    ///
    /// While the track is still downloading the flip is recorded and no
    /// request is produced.
    pub fn toggle(&mut self) -> Option<PlaybackRequest> {
        self.selected.as_ref()?;
        if let Some(pending) = self.pending.as_mut() {
            pending.autoplay = !pending.autoplay;
            tracing::debug!("Start on load set to {}", pending.autoplay);
            return None;
        }
        if self.is_playing {
            Some(PlaybackRequest::Pause)
        } else {
            Some(PlaybackRequest::Resume)
        }
    }

    /// Deselect the active track
    pub fn clear(&mut self) -> Option<PlaybackRequest> {
        let track = self.selected.take()?;
        tracing::info!("Cleared track '{}'", track.name);
        self.generation += 1;
        self.is_playing = false;
        self.pending = None;
        Some(PlaybackRequest::Stop)
    }

    /// Accept the downloaded bytes for `generation`
    ///
    /// Returns whether the source should start playing, or `None` when the
    /// download is stale and must be dropped.
    pub fn finish_load(&mut self, generation: u64) -> Option<bool> {
        if !self.is_current(generation) {
            return None;
        }
        let pending = self.pending.take()?;
        Some(pending.autoplay)
    }

    /// Mirror a media lifecycle event into `is_playing`
    pub fn on_media_event(&mut self, generation: u64, event: MediaEvent) {
        if !self.is_current(generation) {
            tracing::debug!(
                "Ignoring {:?} from stale generation {} (current {})",
                event,
                generation,
                self.generation
            );
            return;
        }
        match event {
            MediaEvent::Play | MediaEvent::Playing => self.is_playing = true,
            MediaEvent::Pause | MediaEvent::Ended => self.is_playing = false,
        }
    }

    /// Record a failed playback start; no retry is attempted
    pub fn on_load_failed(&mut self, generation: u64, error: &str) {
        if generation != self.generation {
            tracing::debug!("Ignoring failure from stale generation {}: {}", generation, error);
            return;
        }
        tracing::error!("Error attempting to play audio: {}", error);
        self.is_playing = false;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::default_tracks;

    fn controller() -> TrackController {
        TrackController::new(default_tracks())
    }

    fn index_of(c: &TrackController, name: &str) -> usize {
        c.tracks().iter().position(|t| t.name == name).unwrap()
    }

    /// Select a track and hand its bytes over, returning its generation
    fn load(c: &mut TrackController, index: usize) -> u64 {
        c.select(index).unwrap();
        let generation = c.generation();
        assert_eq!(c.finish_load(generation), Some(true));
        generation
    }

    #[test]
    fn test_select_closes_picker_and_requests_load() {
        let mut c = controller();
        c.open_picker();
        let request = c.select(0).unwrap();
        assert!(!c.is_picker_open());
        assert_eq!(c.selected().unwrap().name, "Indahnya Calya");
        assert_eq!(
            request,
            PlaybackRequest::Load {
                generation: 1,
                track: default_tracks()[0].clone()
            }
        );
    }

    #[test]
    fn test_select_out_of_range_changes_nothing() {
        let mut c = controller();
        c.open_picker();
        assert!(c.select(99).is_none());
        assert!(c.is_picker_open());
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_switching_tracks_leaves_one_active_source() {
        let mut c = controller();
        let a = c.select(0).unwrap();
        let PlaybackRequest::Load { generation: gen_a, .. } = a else {
            panic!("expected load");
        };
        c.on_media_event(gen_a, MediaEvent::Playing);
        assert!(c.is_playing());

        let b = c.select(1).unwrap();
        let PlaybackRequest::Load { generation: gen_b, track } = b else {
            panic!("expected load");
        };
        assert_ne!(gen_a, gen_b);
        assert_eq!(track.name, c.selected().unwrap().name);
        assert!(!c.is_current(gen_a));
        assert!(c.is_current(gen_b));

        // B has reported nothing yet, so nothing is playing
        assert!(!c.is_playing());

        // Late events from A no longer affect state
        c.on_media_event(gen_a, MediaEvent::Playing);
        assert!(!c.is_playing());
        c.on_media_event(gen_b, MediaEvent::Play);
        assert!(c.is_playing());
    }

    #[test]
    fn test_switch_while_playing_is_not_playing_until_new_source_reports() {
        let mut c = controller();
        let g0 = load(&mut c, 0);
        c.on_media_event(g0, MediaEvent::Playing);

        c.select(1);
        c.on_media_event(g0, MediaEvent::Pause);
        assert!(!c.is_playing());
        assert!(c.is_loading());
        assert!(c.wants_playback());
        // No source exists yet, so no pause is sent anywhere
        assert_eq!(c.toggle(), None);
    }

    #[test]
    fn test_pause_during_download_loads_paused() {
        let mut c = controller();
        c.select(3);
        let g = c.generation();

        assert_eq!(c.toggle(), None);
        assert!(!c.wants_playback());
        assert_eq!(c.finish_load(g), Some(false));
        assert!(!c.is_loading());

        // The paused source resumes like any other
        assert_eq!(c.toggle(), Some(PlaybackRequest::Resume));
    }

    #[test]
    fn test_double_toggle_during_download_still_autoplays() {
        let mut c = controller();
        c.select(3);
        let g = c.generation();
        c.toggle();
        c.toggle();
        assert_eq!(c.finish_load(g), Some(true));
    }

    #[test]
    fn test_stale_download_is_dropped() {
        let mut c = controller();
        c.select(0);
        let old = c.generation();
        c.select(1);
        assert_eq!(c.finish_load(old), None);
        // The current download is still expected
        assert!(c.is_loading());
        assert_eq!(c.finish_load(c.generation()), Some(true));
        // Bytes only count once
        assert_eq!(c.finish_load(c.generation()), None);
    }

    #[test]
    fn test_download_after_clear_is_dropped() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        c.clear();
        assert!(!c.is_loading());
        assert_eq!(c.finish_load(g), None);
    }

    #[test]
    fn test_toggle_keeps_selection() {
        let mut c = controller();
        let generation = load(&mut c, 2);
        c.on_media_event(generation, MediaEvent::Playing);

        assert_eq!(c.toggle(), Some(PlaybackRequest::Pause));
        c.on_media_event(generation, MediaEvent::Pause);
        assert_eq!(c.toggle(), Some(PlaybackRequest::Resume));
        assert_eq!(c.selected().unwrap().name, "Monolog");
        assert_eq!(c.generation(), generation);
    }

    #[test]
    fn test_toggle_without_selection_is_none() {
        assert_eq!(controller().toggle(), None);
    }

    #[test]
    fn test_is_playing_mirrors_last_event() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        let sequence = [
            (MediaEvent::Play, true),
            (MediaEvent::Pause, false),
            (MediaEvent::Playing, true),
            (MediaEvent::Ended, false),
            (MediaEvent::Playing, true),
        ];
        for (event, expected) in sequence {
            c.on_media_event(g, event);
            assert_eq!(c.is_playing(), expected, "after {:?}", event);
        }
    }

    #[test]
    fn test_external_pause_is_reflected() {
        let mut c = controller();
        let g = load(&mut c, 0);
        c.on_media_event(g, MediaEvent::Playing);
        // No user action, the output reports a pause on its own
        c.on_media_event(g, MediaEvent::Pause);
        assert!(!c.is_playing());
        assert_eq!(c.toggle(), Some(PlaybackRequest::Resume));
    }

    #[test]
    fn test_load_failure_resets_playing() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        c.on_media_event(g, MediaEvent::Play);
        c.on_load_failed(g, "blocked");
        assert!(!c.is_playing());
        assert!(!c.is_loading());
        assert!(c.selected().is_some());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut c = controller();
        c.select(0);
        let old = c.generation();
        c.select(1);
        c.on_media_event(c.generation(), MediaEvent::Playing);
        c.on_load_failed(old, "timeout");
        assert!(c.is_playing());
    }

    #[test]
    fn test_clear_stops_and_deselects() {
        let mut c = controller();
        c.select(0);
        let g = c.generation();
        c.on_media_event(g, MediaEvent::Playing);
        assert_eq!(c.clear(), Some(PlaybackRequest::Stop));
        assert!(c.selected().is_none());
        assert!(!c.is_playing());
        assert_eq!(c.toggle(), None);
        // Events for the cleared source are ignored
        c.on_media_event(g, MediaEvent::Playing);
        assert!(!c.is_playing());
        assert_eq!(c.clear(), None);
    }

    #[test]
    fn test_monolog_scenario() {
        let mut c = controller();
        c.open_picker();
        assert!(c.is_picker_open());

        let monolog = index_of(&c, "Monolog");
        let request = c.select(monolog).unwrap();
        assert!(!c.is_picker_open());
        assert_eq!(c.selected().unwrap().name, "Monolog");
        assert!(matches!(request, PlaybackRequest::Load { ref track, .. } if track.name == "Monolog"));

        let g = c.generation();
        assert_eq!(c.finish_load(g), Some(true));
        c.on_media_event(g, MediaEvent::Play);
        c.on_media_event(g, MediaEvent::Playing);
        assert!(c.is_playing());

        assert_eq!(c.toggle(), Some(PlaybackRequest::Pause));
        c.on_media_event(g, MediaEvent::Pause);
        assert!(!c.is_playing());
        // Next press resumes rather than restarting
        assert_eq!(c.toggle(), Some(PlaybackRequest::Resume));
        assert_eq!(c.selected().unwrap().name, "Monolog");
    }
}
