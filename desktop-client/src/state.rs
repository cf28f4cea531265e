use std::sync::{Arc, Mutex};

use eframe::egui;
use snake_common::GameSnapshot;

#[derive(Default)]
struct Inner {
    snapshot: Option<GameSnapshot>,
    game_over: Option<GameSnapshot>,
    repaint: Option<egui::Context>,
}

/// State the session task publishes and the UI thread renders.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<Inner>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_context(&self, ctx: egui::Context) {
        self.inner.lock().unwrap().repaint = Some(ctx);
    }

    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        let mut inner = self.inner.lock().unwrap();
        if !snapshot.is_dead {
            inner.game_over = None;
        }
        inner.snapshot = Some(snapshot);
        if let Some(ctx) = &inner.repaint {
            ctx.request_repaint();
        }
    }

    pub fn set_game_over(&self, snapshot: GameSnapshot) {
        self.inner.lock().unwrap().game_over = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.inner.lock().unwrap().snapshot.clone()
    }

    pub fn game_over(&self) -> Option<GameSnapshot> {
        self.inner.lock().unwrap().game_over.clone()
    }
}
