use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board. Rows and columns are 1-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column delta of one move.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

/// Boundary policy of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Hard walls, leaving the board is fatal.
    #[default]
    Normal,
    /// Edges wrap toroidally.
    Infinite,
}

impl Mode {
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Normal => Mode::Infinite,
            Mode::Infinite => Mode::Normal,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Infinite => write!(f, "Infinite"),
        }
    }
}

/// How eaten food turns into body length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRule {
    /// The tail is kept on the tick the head reaches the food.
    Immediate,
    /// The eating segment is flagged and the tail is kept once that
    /// segment has become the tail.
    #[default]
    Digest,
}

/// One body cell. `has_food` marks a segment that is still digesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub cell: Coordinate,
    pub has_food: bool,
}

impl Segment {
    pub fn new(cell: Coordinate) -> Self {
        Self { cell, has_food: false }
    }

    pub fn with_food(cell: Coordinate, has_food: bool) -> Self {
        Self { cell, has_food }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::WallCollision => write!(f, "wall collision"),
            DeathReason::SelfCollision => write!(f, "self collision"),
        }
    }
}

/// Lifecycle of one game. `is_running` and `is_dead` are both read from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Running,
    Paused,
    Dead(DeathReason),
}
