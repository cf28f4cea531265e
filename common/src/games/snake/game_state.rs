use std::time::Duration;

use crate::games::SessionRng;
use super::food::place_food;
use super::grid;
use super::level::{Progress, ScoringFormula};
use super::settings::SnakeSessionSettings;
use super::snake::{Snake, INITIAL_DIRECTION};
use super::snapshot::GameSnapshot;
use super::types::{Coordinate, DeathReason, Direction, GamePhase, GrowthRule, Mode, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game was not running, nothing changed.
    Idle,
    Moved,
    Ate { next_food: Coordinate },
    Died(DeathReason),
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    size: i32,
    mode: Mode,
    growth_rule: GrowthRule,
    scoring_formula: ScoringFormula,
    snake: Snake,
    current_direction: Direction,
    pending_direction: Direction,
    food: Coordinate,
    progress: Progress,
    phase: GamePhase,
    steps: u64,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::initial(settings.size);
        let food = place_food(snake.segments(), settings.size, rng);

        Self {
            size: settings.size,
            mode: settings.mode,
            growth_rule: settings.growth_rule,
            scoring_formula: settings.scoring_formula,
            snake,
            current_direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            food,
            progress: Progress::default(),
            phase: GamePhase::Ready,
            steps: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.phase, GamePhase::Dead(_))
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        match self.phase {
            GamePhase::Dead(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coordinate {
        self.food
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn food_eaten(&self) -> u32 {
        self.progress.food_eaten
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn level(&self) -> u32 {
        self.scoring_formula.level(self.progress)
    }

    pub fn delay(&self) -> Duration {
        self.scoring_formula.delay(self.progress)
    }

    /// Interval the scheduler should run at, `None` whenever ticks must stop.
    pub fn tick_period(&self) -> Option<Duration> {
        self.is_running().then(|| self.delay())
    }

    /// Buffers a turn for the next tick. Returns whether it was accepted;
    /// turns are dropped while not running and when they reverse the
    /// current heading.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || direction.is_opposite(&self.current_direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn on_direction_key(&mut self, code: u32) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => self.set_pending_direction(direction),
            None => false,
        }
    }

    pub fn start(&mut self) -> Result<(), String> {
        match self.phase {
            GamePhase::Ready | GamePhase::Paused => {
                self.phase = GamePhase::Running;
                Ok(())
            }
            GamePhase::Running => Err("Game is already running".to_string()),
            GamePhase::Dead(_) => Err("Game is over, reset before starting again".to_string()),
        }
    }

    pub fn pause(&mut self) -> Result<(), String> {
        if !self.is_running() {
            return Err("Only a running game can be paused".to_string());
        }
        self.phase = GamePhase::Paused;
        Ok(())
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::initial(self.size);
        self.current_direction = INITIAL_DIRECTION;
        self.pending_direction = INITIAL_DIRECTION;
        self.food = place_food(self.snake.segments(), self.size, rng);
        self.progress = Progress::default();
        self.phase = GamePhase::Ready;
        self.steps = 0;
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), String> {
        if self.is_running() {
            return Err("Mode cannot change while the game is running".to_string());
        }
        self.mode = mode;
        Ok(())
    }

    /// Advances the game by one tick.
    pub fn step(&mut self, rng: &mut SessionRng) -> StepOutcome {
        if !self.is_running() {
            return StepOutcome::Idle;
        }

        self.steps += 1;
        self.current_direction = self.pending_direction;

        let target = grid::add(self.snake.head(), self.current_direction);
        let new_head = match self.mode {
            Mode::Normal => {
                if !grid::is_on_board(target, self.size) {
                    return self.die(DeathReason::WallCollision);
                }
                target
            }
            Mode::Infinite => grid::wrap_coordinate(target, self.size),
        };

        let will_eat = new_head == self.food;
        let head_segment = Segment::with_food(new_head, will_eat);
        let body = self.snake.next_body(self.growth_rule, will_eat);

        if body.iter().any(|segment| segment.cell == new_head) {
            return self.die(DeathReason::SelfCollision);
        }

        self.snake = Snake::advanced(head_segment, body);

        if !will_eat {
            return StepOutcome::Moved;
        }

        self.progress = self.scoring_formula.on_food_eaten(self.progress);
        self.food = place_food(self.snake.segments(), self.size, rng);
        StepOutcome::Ate { next_food: self.food }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            segments: self.snake.segments().to_vec(),
            food: self.food,
            score: self.progress.score,
            level: self.level(),
            food_eaten: self.progress.food_eaten,
            delay: self.delay(),
            is_running: self.is_running(),
            is_paused: self.is_paused(),
            is_dead: self.is_dead(),
            death_reason: self.death_reason(),
            board_size: self.size,
            mode: self.mode,
            steps: self.steps,
        }
    }

    fn die(&mut self, reason: DeathReason) -> StepOutcome {
        self.phase = GamePhase::Dead(reason);
        StepOutcome::Died(reason)
    }
}
