use super::types::Direction;

pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

impl Direction {
    /// Arrow key codes as reported by keyboard events; anything else is ignored.
    pub fn from_key_code(code: u32) -> Option<Direction> {
        match code {
            KEY_LEFT => Some(Direction::Left),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }
}
