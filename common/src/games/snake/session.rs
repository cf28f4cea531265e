use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::game_state::{SnakeGameState, StepOutcome};
use super::scheduler::TickScheduler;
use super::settings::SnakeSessionSettings;
use super::snapshot::GameSnapshot;
use super::types::{Direction, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    DirectionKey(u32),
    Start,
    Pause,
    Reset,
    SetMode(Mode),
    Shutdown,
}

/// Cloneable sender side of a running session.
#[derive(Clone)]
pub struct SnakeSessionHandle {
    session_id: String,
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SnakeSessionHandle {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns false once the session has stopped.
    pub fn send(&self, command: SessionCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn turn(&self, direction: Direction) -> bool {
        self.send(SessionCommand::Turn(direction))
    }

    pub fn direction_key(&self, code: u32) -> bool {
        self.send(SessionCommand::DirectionKey(code))
    }

    pub fn start(&self) -> bool {
        self.send(SessionCommand::Start)
    }

    pub fn pause(&self) -> bool {
        self.send(SessionCommand::Pause)
    }

    pub fn reset(&self) -> bool {
        self.send(SessionCommand::Reset)
    }

    pub fn set_mode(&self, mode: Mode) -> bool {
        self.send(SessionCommand::SetMode(mode))
    }

    pub fn shutdown(&self) -> bool {
        self.send(SessionCommand::Shutdown)
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Runs a session on the current runtime.
    pub fn spawn<B: GameBroadcaster>(
        session_id: String,
        settings: SnakeSessionSettings,
        broadcaster: B,
    ) -> (SnakeSessionHandle, JoinHandle<GameSnapshot>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = SnakeSessionHandle {
            session_id: session_id.clone(),
            commands: tx,
        };
        let task = tokio::spawn(Self::run(session_id, settings, rx, broadcaster));
        (handle, task)
    }

    /// Owns the game state and serializes ticks and commands on one task.
    /// The timer is rescheduled after every event, so it only runs while the
    /// game does and always at the current level's period.
    pub async fn run(
        session_id: String,
        settings: SnakeSessionSettings,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> GameSnapshot {
        let mut rng = SessionRng::from_optional_seed(settings.seed);
        let mut state = SnakeGameState::new(&settings, &mut rng);
        let mut scheduler = TickScheduler::new();

        log!(
            "[session:{}] Created {}x{} {} game (seed {})",
            session_id,
            settings.size,
            settings.size,
            settings.mode,
            rng.seed()
        );
        broadcaster.broadcast_state(state.snapshot()).await;

        loop {
            let died = tokio::select! {
                _ = scheduler.tick() => Self::handle_tick(&session_id, &mut state, &mut rng),
                command = commands.recv() => match command {
                    None | Some(SessionCommand::Shutdown) => break,
                    Some(command) => {
                        Self::handle_command(&session_id, &mut state, &mut rng, command);
                        false
                    }
                },
            };

            if scheduler.reschedule(state.tick_period())
                && let Some(period) = scheduler.period()
            {
                log!("[session:{}] Tick period {}ms", session_id, period.as_millis());
            }

            let snapshot = state.snapshot();
            broadcaster.broadcast_state(snapshot.clone()).await;
            if died {
                broadcaster.broadcast_game_over(snapshot).await;
            }
        }

        scheduler.cancel();
        log!("[session:{}] Closed", session_id);
        state.snapshot()
    }

    fn handle_tick(session_id: &str, state: &mut SnakeGameState, rng: &mut SessionRng) -> bool {
        match state.step(rng) {
            StepOutcome::Ate { next_food } => {
                log!(
                    "[session:{}] Ate food at {}. Score: {}, level: {}, next food at {}",
                    session_id,
                    state.snake().head(),
                    state.score(),
                    state.level(),
                    next_food
                );
                false
            }
            StepOutcome::Died(reason) => {
                log!(
                    "[session:{}] Snake died ({}) after {} steps with score {}",
                    session_id,
                    reason,
                    state.steps(),
                    state.score()
                );
                true
            }
            StepOutcome::Moved | StepOutcome::Idle => false,
        }
    }

    fn handle_command(
        session_id: &str,
        state: &mut SnakeGameState,
        rng: &mut SessionRng,
        command: SessionCommand,
    ) {
        let result = match command {
            SessionCommand::Turn(direction) => {
                state.set_pending_direction(direction);
                Ok(())
            }
            SessionCommand::DirectionKey(code) => {
                state.on_direction_key(code);
                Ok(())
            }
            SessionCommand::Start => state.start(),
            SessionCommand::Pause => state.pause(),
            SessionCommand::Reset => {
                state.reset(rng);
                Ok(())
            }
            SessionCommand::SetMode(mode) => state.set_mode(mode),
            SessionCommand::Shutdown => Ok(()),
        };

        match result {
            Ok(()) => {
                if !matches!(command, SessionCommand::Turn(_) | SessionCommand::DirectionKey(_)) {
                    log!("[session:{}] {:?} applied", session_id, command);
                }
            }
            Err(e) => log!("[session:{}] {:?} rejected: {}", session_id, command, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::sleep;

    use crate::games::snake::{Coordinate, DeathReason, GrowthRule, ScoringFormula};

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        states: Arc<Mutex<Vec<GameSnapshot>>>,
        game_overs: Arc<Mutex<Vec<GameSnapshot>>>,
    }

    impl RecordingBroadcaster {
        fn latest(&self) -> GameSnapshot {
            self.states
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("session should have published a snapshot")
        }

        fn state_count(&self) -> usize {
            self.states.lock().unwrap().len()
        }

        fn game_over_count(&self) -> usize {
            self.game_overs.lock().unwrap().len()
        }
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: GameSnapshot) {
            self.states.lock().unwrap().push(snapshot);
        }

        async fn broadcast_game_over(&self, snapshot: GameSnapshot) {
            self.game_overs.lock().unwrap().push(snapshot);
        }
    }

    fn settings() -> SnakeSessionSettings {
        SnakeSessionSettings {
            size: 15,
            mode: Mode::Normal,
            scoring_formula: ScoringFormula::Linear,
            growth_rule: GrowthRule::Immediate,
            seed: Some(3),
        }
    }

    fn spawn() -> (SnakeSessionHandle, JoinHandle<GameSnapshot>, RecordingBroadcaster) {
        let broadcaster = RecordingBroadcaster::default();
        let (handle, task) = SnakeSession::spawn("test".to_string(), settings(), broadcaster.clone());
        (handle, task, broadcaster)
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_initial_state() {
        let (handle, _task, broadcaster) = spawn();
        sleep(Duration::from_millis(1)).await;

        let snapshot = broadcaster.latest();
        assert!(snapshot.is_pristine());
        assert_eq!(snapshot.head(), Some(Coordinate::new(10, 10)));
        assert_eq!(handle.session_id(), "test");
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_moves_before_start() {
        let (_handle, _task, broadcaster) = spawn();
        sleep(Duration::from_secs(5)).await;

        let snapshot = broadcaster.latest();
        assert_eq!(snapshot.steps, 0);
        assert_eq!(broadcaster.state_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period_while_running() {
        let (handle, _task, broadcaster) = spawn();
        handle.start();

        sleep(Duration::from_millis(260)).await;
        let snapshot = broadcaster.latest();
        assert_eq!(snapshot.steps, 1);
        assert_eq!(snapshot.head(), Some(Coordinate::new(10, 9)));

        sleep(Duration::from_millis(250)).await;
        let snapshot = broadcaster.latest();
        assert_eq!(snapshot.steps, 2);
        assert_eq!(snapshot.head(), Some(Coordinate::new(10, 8)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_applies_on_next_tick() {
        let (handle, _task, broadcaster) = spawn();
        handle.start();
        handle.turn(Direction::Up);

        sleep(Duration::from_millis(260)).await;
        assert_eq!(broadcaster.latest().head(), Some(Coordinate::new(9, 10)));

        // Down reverses Up and is dropped.
        handle.direction_key(40);
        sleep(Duration::from_millis(250)).await;
        assert_eq!(broadcaster.latest().head(), Some(Coordinate::new(8, 10)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticks() {
        let (handle, _task, broadcaster) = spawn();
        handle.start();
        sleep(Duration::from_millis(260)).await;

        handle.pause();
        sleep(Duration::from_secs(3)).await;

        let snapshot = broadcaster.latest();
        assert_eq!(snapshot.steps, 1);
        assert!(snapshot.is_paused);
        assert!(!snapshot.is_running);

        handle.start();
        sleep(Duration::from_millis(260)).await;
        assert_eq!(broadcaster.latest().steps, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_death_cancels_timer() {
        let (handle, _task, broadcaster) = spawn();
        handle.start();
        sleep(Duration::from_secs(5)).await;

        let snapshot = broadcaster.latest();
        assert!(snapshot.is_dead);
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(snapshot.head(), Some(Coordinate::new(10, 1)));
        assert_eq!(broadcaster.game_over_count(), 1);

        let published = broadcaster.state_count();
        sleep(Duration::from_secs(5)).await;
        assert_eq!(broadcaster.state_count(), published);

        // Start is refused until reset.
        handle.start();
        sleep(Duration::from_secs(1)).await;
        assert!(broadcaster.latest().is_dead);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_returns_to_ready() {
        let (handle, _task, broadcaster) = spawn();
        handle.start();
        sleep(Duration::from_millis(760)).await;

        handle.reset();
        sleep(Duration::from_secs(2)).await;

        let snapshot = broadcaster.latest();
        assert!(snapshot.is_pristine());
        assert_eq!(snapshot.steps, 0);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.head(), Some(Coordinate::new(10, 10)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mode_change_needs_stopped_game() {
        let (handle, _task, broadcaster) = spawn();
        handle.start();
        handle.set_mode(Mode::Infinite);
        sleep(Duration::from_millis(10)).await;
        assert_eq!(broadcaster.latest().mode, Mode::Normal);

        handle.pause();
        handle.set_mode(Mode::Infinite);
        sleep(Duration::from_millis(10)).await;
        assert_eq!(broadcaster.latest().mode, Mode::Infinite);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_returns_final_snapshot() {
        let (handle, task, _broadcaster) = spawn();
        handle.start();
        sleep(Duration::from_millis(260)).await;

        assert!(handle.shutdown());
        let last = task.await.unwrap();
        assert_eq!(last.steps, 1);
        assert!(!handle.start());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handles_ends_session() {
        let (handle, task, _broadcaster) = spawn();
        drop(handle);
        let last = task.await.unwrap();
        assert!(last.is_pristine());
    }
}
