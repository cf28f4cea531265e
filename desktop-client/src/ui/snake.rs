use eframe::egui;
use snake_common::games::snake::{SnakeSessionHandle, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use snake_common::GameSnapshot;

use crate::state::SharedState;

use super::board::{self, BOARD_COLOR, BODY_COLOR, DIGESTING_COLOR, FOOD_COLOR, HEAD_COLOR};

pub struct SnakeApp {
    session: SnakeSessionHandle,
    shared_state: SharedState,
    board_pixels: f32,
}

/// Which controls are clickable for a given snapshot.
#[derive(Debug, PartialEq, Eq)]
struct ControlState {
    can_switch_mode: bool,
    can_start: bool,
    can_pause: bool,
    can_reset: bool,
}

impl ControlState {
    fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            can_switch_mode: !snapshot.is_running,
            can_start: !snapshot.is_running && !snapshot.is_dead,
            can_pause: snapshot.is_running,
            can_reset: !snapshot.is_pristine(),
        }
    }
}

impl SnakeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: SnakeSessionHandle,
        shared_state: SharedState,
        board_pixels: f32,
    ) -> Self {
        shared_state.attach_context(cc.egui_ctx.clone());
        Self {
            session,
            shared_state,
            board_pixels,
        }
    }

    fn handle_input(&self, ctx: &egui::Context, snapshot: &GameSnapshot) {
        let (key_code, toggle) = ctx.input(|i| {
            let key_code = if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(KEY_UP)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(KEY_DOWN)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(KEY_LEFT)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(KEY_RIGHT)
            } else {
                None
            };
            (key_code, i.key_pressed(egui::Key::Space))
        });

        if let Some(code) = key_code {
            self.session.direction_key(code);
        }

        if toggle {
            let controls = ControlState::from_snapshot(snapshot);
            if controls.can_pause {
                self.session.pause();
            } else if controls.can_start {
                self.session.start();
            }
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let controls = ControlState::from_snapshot(snapshot);

        ui.horizontal(|ui| {
            let switch_text = format!("Switch to {} Mode", snapshot.mode.toggled());
            if ui
                .add_enabled(controls.can_switch_mode, egui::Button::new(switch_text))
                .clicked()
            {
                self.session.set_mode(snapshot.mode.toggled());
            }
            if ui
                .add_enabled(controls.can_start, egui::Button::new("Start"))
                .clicked()
            {
                self.session.start();
            }
            if ui
                .add_enabled(controls.can_pause, egui::Button::new("Pause"))
                .clicked()
            {
                self.session.pause();
            }
            if ui
                .add_enabled(controls.can_reset, egui::Button::new("Reset"))
                .clicked()
            {
                self.session.reset();
            }
        });
    }

    fn render_meta(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.label(format!("Level: {}", snapshot.level));
            ui.separator();
            if snapshot.is_dead {
                ui.label(
                    egui::RichText::new("You Died!")
                        .color(egui::Color32::RED)
                        .strong(),
                );
                ui.separator();
            }
            ui.label(format!("Score: {}", snapshot.score));
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let available = ui.available_size();
        let side = self.board_pixels.min(available.x).min(available.y).max(1.0);
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, BOARD_COLOR);

        let food = board::cell_rect(rect, snapshot.board_size, snapshot.food);
        painter.circle_filled(food.center(), food.width() * 0.4, FOOD_COLOR);

        for (index, segment) in snapshot.segments.iter().enumerate() {
            let color = if index == 0 {
                HEAD_COLOR
            } else if segment.has_food {
                DIGESTING_COLOR
            } else {
                BODY_COLOR
            };
            let cell = board::cell_rect(rect, snapshot.board_size, segment.cell);
            painter.rect_filled(cell.shrink(1.0), 0.0, color);
        }

        painter.extend(board::border_shapes(rect, snapshot.mode));
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(snapshot) = self.shared_state.snapshot() else {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for game state...");
                });
                return;
            };

            self.handle_input(ctx, &snapshot);

            ui.vertical_centered(|ui| {
                ui.heading(format!("{} Snake", snapshot.mode));
                ui.add_space(6.0);
                self.render_meta(ui, &snapshot);
                ui.add_space(6.0);
                self.render_controls(ui, &snapshot);
                ui.add_space(10.0);
                self.render_board(ui, &snapshot);
                ui.add_space(6.0);
                if let Some(over) = self.shared_state.game_over()
                    && let Some(reason) = over.death_reason
                {
                    ui.label(format!(
                        "Died of {} after {} steps, press Reset to play again",
                        reason, over.steps
                    ));
                } else {
                    ui.label("Arrow Keys or WASD to turn, Space to start or pause");
                }
            });

            if snapshot.is_running {
                ctx.request_repaint_after(snapshot.delay);
            }
        });
    }
}
