use eframe::egui;
use snake_common::{Coordinate, Mode};

pub const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 0, 128);
pub const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 20, 20);
pub const DIGESTING_COLOR: egui::Color32 = egui::Color32::from_rgb(139, 0, 0);
pub const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 90, 220);
pub const BOARD_COLOR: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);
pub const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);

const BORDER_WIDTH: f32 = 2.0;
const DASH_LENGTH: f32 = 8.0;
const GAP_LENGTH: f32 = 6.0;

/// Screen rectangle of a 1-based board cell.
pub fn cell_rect(board: egui::Rect, board_size: i32, cell: Coordinate) -> egui::Rect {
    let side = cell_side(board, board_size);
    let min = egui::pos2(
        board.min.x + (cell.col - 1) as f32 * side,
        board.min.y + (cell.row - 1) as f32 * side,
    );
    egui::Rect::from_min_size(min, egui::vec2(side, side))
}

pub fn cell_side(board: egui::Rect, board_size: i32) -> f32 {
    board.width().min(board.height()) / board_size.max(1) as f32
}

/// Solid in Normal mode, dashed when the edges wrap.
pub fn border_shapes(board: egui::Rect, mode: Mode) -> Vec<egui::Shape> {
    let stroke = egui::Stroke::new(BORDER_WIDTH, BORDER_COLOR);
    match mode {
        Mode::Normal => vec![egui::Shape::rect_stroke(
            board,
            0.0,
            stroke,
            egui::StrokeKind::Inside,
        )],
        Mode::Infinite => {
            let points = [
                board.left_top(),
                board.right_top(),
                board.right_bottom(),
                board.left_bottom(),
                board.left_top(),
            ];
            egui::Shape::dashed_line(&points, stroke, DASH_LENGTH, GAP_LENGTH)
        }
    }
}
