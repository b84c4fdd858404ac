use winit::event::VirtualKeyCode;

use crate::game::Command;
use crate::geometry::Direction;

/// DOM-style key codes for the arrow keys: 37 left, 38 up, 39 right, 40 down.
pub fn direction_for_key_code(code: u32) -> Option<Direction> {
    match code {
        37 => Some(Direction::Left),
        38 => Some(Direction::Up),
        39 => Some(Direction::Right),
        40 => Some(Direction::Down),
        _ => None,
    }
}

pub fn direction_for_virtual_key(key: VirtualKeyCode) -> Option<Direction> {
    match key {
        VirtualKeyCode::Left => Some(Direction::Left),
        VirtualKeyCode::Up => Some(Direction::Up),
        VirtualKeyCode::Right => Some(Direction::Right),
        VirtualKeyCode::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Turn command for a pressed key, `None` for keys the game ignores.
pub fn command_for_key(key: VirtualKeyCode) -> Option<Command> {
    direction_for_virtual_key(key).map(Command::Turn)
}
