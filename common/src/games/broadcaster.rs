use std::future::Future;

use crate::games::snake::GameSnapshot;

/// Receives the state a session publishes after every event.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
