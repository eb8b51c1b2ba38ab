//! Application state definitions

use iced::Size;
use iced::time::Instant;

use crate::audio::{AudioHandle, AudioThreadHandle};
use crate::cache::AssetCache;
use crate::features::decoration::{self, Particle};
use crate::features::{Config, Gallery, KeyBindings, TrackController};
use crate::i18n::Locale;
use crate::ui::animation::{HoverAnimations, Pulse};

/// Main application state
pub struct App {
    /// Core services (config, audio, network)
    pub core: CoreState,
    /// Gallery and music selection
    pub library: LibraryState,
    /// Animation and layout state
    pub ui: UiState,
}

/// Core services
pub struct CoreState {
    pub config: Config,
    pub locale: Locale,
    /// Audio thread, or `None` if it could not be spawned
    pub audio: Option<AudioThreadHandle>,
    pub http: reqwest::Client,
    pub assets: AssetCache,
    pub keybindings: KeyBindings,
}

impl CoreState {
    pub fn new(config: Config, locale: Locale) -> Self {
        let audio = match crate::audio::spawn_audio_thread(config.playback.volume) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!("Failed to start audio thread: {}", e);
                None
            }
        };
        let http = crate::utils::http_client(std::time::Duration::from_secs(
            config.network.timeout_secs,
        ));

        Self {
            config,
            locale,
            audio,
            http,
            assets: AssetCache::new(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Handle for sending commands to the audio thread
    pub fn audio_handle(&self) -> Option<&AudioHandle> {
        self.audio.as_ref().map(|audio| &audio.handle)
    }
}

/// Gallery cards and the track selection
pub struct LibraryState {
    pub gallery: Gallery,
    pub controller: TrackController,
}

impl LibraryState {
    pub fn new(config: &Config) -> Self {
        Self {
            gallery: Gallery::new(config.images()),
            controller: TrackController::new(config.tracks()),
        }
    }
}

/// UI View State
pub struct UiState {
    pub card_hover: HoverAnimations<usize>,
    pub now_playing_pulse: Pulse,
    /// Generated once at startup and never changed
    pub particles: Vec<Particle>,
    pub started: Instant,
    /// Time of the latest animation frame
    pub now: Instant,
    pub window_size: Size,
}

impl UiState {
    pub fn new(config: &Config) -> Self {
        let animations = config.display.animations;
        let particles = decoration::generate(&mut rand::rng(), config.display.particle_count);
        tracing::debug!("Generated {} background particles", particles.len());
        let now = Instant::now();

        Self {
            card_hover: HoverAnimations::new(animations),
            now_playing_pulse: Pulse::new(animations),
            particles,
            started: now,
            now,
            window_size: Size::new(1280.0, 860.0),
        }
    }

    /// Whether a hover or pulse transition is in flight
    pub fn has_active_animations(&self) -> bool {
        self.card_hover.is_animating() || self.now_playing_pulse.is_animating()
    }

    /// Time since startup, as seen by the last frame
    pub fn elapsed(&self) -> std::time::Duration {
        self.now.saturating_duration_since(self.started)
    }
}
