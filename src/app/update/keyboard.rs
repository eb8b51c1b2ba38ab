//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        tracing::debug!("Executing action {:?}", action);
        match action {
            Action::CloseOverlay => {
                // The picker sits above every lightbox
                if self.library.controller.is_picker_open() {
                    self.library.controller.close_picker();
                } else {
                    self.library.gallery.close_topmost();
                }
                Task::none()
            }
            Action::PlayPause => self.update(Message::TogglePlayback),
            Action::OpenSongPicker => self.update(Message::OpenSongPicker),
            Action::ClearTrack => self.update(Message::ClearTrack),
        }
    }
}
