mod food;
mod game_state;
pub mod grid;
mod input;
mod level;
mod scheduler;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use food::place_food;
pub use game_state::{SnakeGameState, StepOutcome};
pub use input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
pub use level::{Progress, ScoringFormula};
pub use scheduler::TickScheduler;
pub use session::{SessionCommand, SnakeSession, SnakeSessionHandle};
pub use settings::{SnakeGameConfig, SnakeSessionSettings, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use snake::{Snake, INITIAL_DIRECTION, INITIAL_LENGTH};
pub use snapshot::GameSnapshot;
pub use types::{Coordinate, DeathReason, Direction, GamePhase, GrowthRule, Mode, Segment};
