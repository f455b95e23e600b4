//! Keyboard input handling

use game_core::{Mode, Side};
use proto::Command;

use crate::wire_side;

/// Map a key press to a command. The right paddle keys only count in
/// two-player matches.
pub fn command_for_key(key: &str, mode: Mode) -> Option<Command> {
    let command = match key {
        "w" | "W" => move_paddle(Side::Left, 1),
        "s" | "S" => move_paddle(Side::Left, -1),
        "Up" | "ArrowUp" if mode == Mode::TwoPlayer => move_paddle(Side::Right, 1),
        "Down" | "ArrowDown" if mode == Mode::TwoPlayer => move_paddle(Side::Right, -1),
        "p" | "P" => Command::TogglePause,
        "Escape" => Command::ReturnToMenu,
        "Return" | "Enter" | "space" | " " => Command::Continue,
        _ => return None,
    };
    Some(command)
}

fn move_paddle(side: Side, dir: i8) -> Command {
    Command::MovePaddle {
        side: wire_side(side),
        dir,
    }
}
