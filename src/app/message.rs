//! Application messages

use iced::Size;
use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use crate::audio::AudioEvent;
use crate::cache::Asset;
use crate::features::{Action, CardMessage};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Window & Animation ============
    /// Frame tick while something is animating
    AnimationTick(Instant),
    /// Periodic playback position sync
    PlaybackTick,
    /// Window resized
    WindowResized(Size),

    // ============ Keyboard ============
    /// Key pressed with modifiers
    KeyPressed(Key, Modifiers),
    /// Execute a keybinding action
    ExecuteAction(Action),

    // ============ Gallery ============
    /// Message for the card at an index
    Card(usize, CardMessage),
    /// Image bytes downloaded (or failed) for the card at an index
    ImageLoaded(usize, Result<Asset, String>),

    // ============ Music ============
    /// Show the song picker
    OpenSongPicker,
    /// Hide the song picker
    CloseSongPicker,
    /// Track chosen in the picker
    SelectTrack(usize),
    /// Pause or resume the active track
    TogglePlayback,
    /// Stop and deselect the active track
    ClearTrack,
    /// Track bytes downloaded (or failed) for a load generation
    TrackFetched(u64, Result<Asset, String>),
    /// Event from the audio thread
    Audio(AudioEvent),
    /// Audio event stream ended
    AudioStreamClosed,
}
