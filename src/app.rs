//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::Config;
use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::App;
use state::{CoreState, LibraryState, UiState};

/// Position sync interval while a track is selected
const PLAYBACK_TICK_MS: u64 = 250;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        Self::with_config(Config::load())
    }

    /// Create an application instance from an explicit config
    pub fn with_config(config: Config) -> (Self, Task<Message>) {
        let locale = Locale::new(Language::from_code(&config.display.language));

        let mut core = CoreState::new(config, locale);
        let library = LibraryState::new(&core.config);
        let ui = UiState::new(&core.config);

        tracing::info!(
            "Starting with {} images and {} tracks",
            library.gallery.len(),
            library.controller.tracks().len()
        );

        // The event stream lives exactly as long as the audio thread
        let audio_task = match core.audio.as_mut().and_then(|audio| audio.take_event_rx()) {
            Some(rx) => Task::run(helpers::audio_events(rx), |event| match event {
                Some(event) => Message::Audio(event),
                None => Message::AudioStreamClosed,
            }),
            None => Task::none(),
        };

        let app = Self { core, library, ui };
        let images_task = app.load_gallery_images();

        (app, Task::batch([audio_task, images_task]))
    }

    pub fn title(&self) -> String {
        let title = self.core.locale.get(Key::AppTitle);
        match self.library.controller.selected() {
            Some(track) if self.library.controller.is_playing() => {
                format!("{} - {}", title, track.name)
            }
            _ => title.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        crate::ui::theme::app_theme()
    }

    /// Subscriptions for animation frames, playback sync, keyboard and resize
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::keyboard;
        use std::time::Duration;

        let needs_frames = subscription_logic::needs_animation_subscription(
            self.core.config.display.animations,
            self.ui.has_active_animations(),
        );
        let needs_playback = subscription_logic::needs_playback_subscription(
            self.library.controller.selected().is_some(),
        );

        let animation_sub = if needs_frames {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            Subscription::none()
        };

        let playback_sub = if needs_playback {
            iced::time::every(Duration::from_millis(PLAYBACK_TICK_MS))
                .map(|_| Message::PlaybackTick)
        } else {
            Subscription::none()
        };

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([animation_sub, playback_sub, keyboard_sub, resize_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames drive the particle field, so they run whenever animations are on
    pub fn needs_animation_subscription(animations_enabled: bool, transitions_active: bool) -> bool {
        animations_enabled || transitions_active
    }

    /// Position sync runs while any track is selected, playing or paused
    pub fn needs_playback_subscription(track_selected: bool) -> bool {
        track_selected
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_follow_animation_setting() {
        assert!(needs_animation_subscription(true, false));
        assert!(!needs_animation_subscription(false, false));
    }

    #[test]
    fn transitions_still_finish_with_animations_off() {
        assert!(needs_animation_subscription(false, true));
    }

    #[test]
    fn playback_sync_only_with_selection() {
        assert!(needs_playback_subscription(true));
        assert!(!needs_playback_subscription(false));
    }
}
