mod board;
mod snake;

pub use snake::SnakeApp;
