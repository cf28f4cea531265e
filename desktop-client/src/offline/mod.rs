mod broadcaster;
mod snake_runner;

pub use broadcaster::LocalBroadcaster;
pub use snake_runner::start_local_session;
