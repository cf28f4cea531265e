use super::types::{Coordinate, Direction};

/// Maps any offset back into `[1, size]`.
pub fn wrap(value: i32, size: i32) -> i32 {
    (value - 1).rem_euclid(size) + 1
}

pub fn in_bounds(value: i32, size: i32) -> bool {
    (1..=size).contains(&value)
}

pub fn add(coord: Coordinate, direction: Direction) -> Coordinate {
    let (dr, dc) = direction.delta();
    Coordinate::new(coord.row + dr, coord.col + dc)
}

pub fn is_on_board(coord: Coordinate, size: i32) -> bool {
    in_bounds(coord.row, size) && in_bounds(coord.col, size)
}

pub fn wrap_coordinate(coord: Coordinate, size: i32) -> Coordinate {
    Coordinate::new(wrap(coord.row, size), wrap(coord.col, size))
}
