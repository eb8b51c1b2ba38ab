//! Audio player using rodio
//!
//! Holds at most one source. Loading a new source stops the previous one
//! first, so two tracks never overlap. Sources loop until stopped.

use std::io::Cursor;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};

use crate::cache::Asset;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

/// Current playback info
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    pub status: PlaybackStatus,
    pub position: Duration,
}

/// Audio player owning the output stream and the current sink
pub struct AudioPlayer {
    _stream: OutputStream,
    mixer: Mixer,
    sink: Option<Sink>,
    status: PlaybackStatus,
    volume: f32,
}

impl AudioPlayer {
    /// Open the default output device
    pub fn new(volume: f32) -> Result<Self, String> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to create audio output: {}", e))?;
        let mixer = stream.mixer().clone();

        Ok(Self {
            _stream: stream,
            mixer,
            sink: None,
            status: PlaybackStatus::Stopped,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    /// Replace the current source with `data`, positioned at the start
    ///
    /// The source repeats indefinitely. Without `autoplay` it stays paused
    /// until `resume`.
    pub fn load(&mut self, data: Asset, autoplay: bool) -> Result<(), String> {
        self.stop();

        let source = Decoder::new_looped(Cursor::new(data))
            .map_err(|e| format!("Failed to decode audio: {}", e))?;

        let sink = Sink::connect_new(&self.mixer);
        sink.set_volume(self.volume);
        if autoplay {
            sink.append(source);
            sink.play();
            self.status = PlaybackStatus::Playing;
        } else {
            sink.pause();
            sink.append(source);
            self.status = PlaybackStatus::Paused;
        }

        self.sink = Some(sink);
        Ok(())
    }

    /// Pause playback. Returns false when nothing was playing.
    pub fn pause(&mut self) -> bool {
        match &self.sink {
            Some(sink) if self.status == PlaybackStatus::Playing => {
                sink.pause();
                self.status = PlaybackStatus::Paused;
                true
            }
            _ => false,
        }
    }

    /// Resume from the paused position. Returns false when there is no source.
    pub fn resume(&mut self) -> bool {
        match &self.sink {
            Some(sink) => {
                sink.play();
                self.status = PlaybackStatus::Playing;
                true
            }
            None => false,
        }
    }

    /// Stop playback and drop the source
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.status = PlaybackStatus::Stopped;
    }

    pub fn has_source(&self) -> bool {
        self.sink.is_some()
    }

    /// True when a source was playing but the sink ran dry
    ///
    /// Looped sources only run dry when decoding fails mid-stream.
    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Playing && self.sink.as_ref().is_some_and(Sink::empty)
    }

    /// Mark the source as finished after `is_finished` reported it
    pub fn finish(&mut self) {
        self.stop();
    }

    pub fn get_info(&self) -> PlaybackInfo {
        PlaybackInfo {
            status: self.status,
            position: self
                .sink
                .as_ref()
                .map(Sink::get_pos)
                .unwrap_or(Duration::ZERO),
        }
    }
}
