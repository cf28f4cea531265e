use snake_common::games::GameBroadcaster;
use snake_common::{log, GameSnapshot};

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, snapshot: GameSnapshot) {
        if let Some(reason) = snapshot.death_reason {
            log!("Game over: {} (score {}, level {})", reason, snapshot.score, snapshot.level);
        }
        self.shared_state.set_game_over(snapshot);
    }
}
