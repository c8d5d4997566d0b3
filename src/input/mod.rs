use macroquad::prelude::*;

use crate::application::Command;
use crate::ui::Button;

/// Keys the control surface listens to
pub const BOUND_KEYS: [KeyCode; 6] = [
    KeyCode::Space,
    KeyCode::Right,
    KeyCode::N,
    KeyCode::R,
    KeyCode::U,
    KeyCode::Backspace,
];

/// Map a key press to a command. Space toggles between start and pause.
pub fn command_for_key(key: KeyCode, running: bool) -> Option<Command> {
    match key {
        KeyCode::Space if running => Some(Command::Pause),
        KeyCode::Space => Some(Command::Start),
        KeyCode::Right | KeyCode::N => Some(Command::Step),
        KeyCode::R => Some(Command::Reset),
        KeyCode::U | KeyCode::Backspace => Some(Command::Undo),
        _ => None,
    }
}

/// Commands from keys pressed this frame
pub fn process_keyboard_input(running: bool) -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|&&key| is_key_pressed(key))
        .filter_map(|&key| command_for_key(key, running))
        .collect()
}

/// Commands from buttons clicked this frame
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command)
        .collect()
}
