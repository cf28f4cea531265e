use snake_common::games::snake::{SnakeSession, SnakeSessionHandle, SnakeSessionSettings};
use snake_common::log;
use tokio::runtime::Handle;

use crate::state::SharedState;

use super::LocalBroadcaster;

const SESSION_ID: &str = "local";

/// Spawns the session on `runtime` and logs its final state once it closes.
pub fn start_local_session(
    runtime: &Handle,
    settings: SnakeSessionSettings,
    shared_state: SharedState,
) -> SnakeSessionHandle {
    let _guard = runtime.enter();
    let broadcaster = LocalBroadcaster::new(shared_state);
    let (handle, task) = SnakeSession::spawn(SESSION_ID.to_string(), settings, broadcaster);

    runtime.spawn(async move {
        match task.await {
            Ok(last) => log!(
                "Session finished after {} steps with score {} at level {}",
                last.steps,
                last.score,
                last.level
            ),
            Err(e) => log!("Session task failed: {}", e),
        }
    });

    handle
}
