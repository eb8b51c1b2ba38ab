//! Window and animation frame handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick(now) => {
                self.ui.now = *now;
                self.ui.card_hover.tick(*now);
                self.ui.now_playing_pulse.tick(*now);
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.window_size = *size;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
