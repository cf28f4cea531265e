//! Snake game core: board arithmetic, the tick state machine, level and
//! speed formulas, a restartable tick scheduler and the session loop that
//! ties them together, plus config and logging for hosts.

pub mod config;
pub mod games;
pub mod logger;

pub use games::snake::{
    Coordinate, Direction, GameSnapshot, GrowthRule, Mode, ScoringFormula, Segment,
    SnakeGameConfig,
};
