/// Keyboard → game input translation.
use crossterm::event::KeyCode;

use crate::entities::Direction;

/// Arrow keys map to a direction; anything else is ignored.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
