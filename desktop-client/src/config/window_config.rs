use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub board_pixels: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(200.0..=1200.0).contains(&self.board_pixels) {
            return Err("board_pixels must be between 200 and 1200".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { board_pixels: 500.0 }
    }
}
