//! Audio playback module
//!
//! - `AudioPlayer`: rodio output with a single looping source
//! - `events`: Commands, media events and shared state
//! - `handle`: Non-blocking control from the UI thread
//! - `thread`: The dedicated audio thread

pub mod events;
mod handle;
mod player;
mod thread;

pub use events::{AudioEvent, AudioEventReceiver, MediaEvent};
pub use handle::AudioHandle;
pub use player::PlaybackStatus;
pub use thread::{AudioThreadHandle, spawn_audio_thread};
