//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Stone};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Stone,
        last_move: Option<usize>,
        winning_line: Option<&[usize]>,
        game_over: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Scale cells to fit the available space
        let cols = board.cols() as f32;
        let rows = board.rows() as f32;
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows)
            .max(8.0);

        let size = Vec2::new(
            cols * self.cell_size + 2.0 * BOARD_MARGIN,
            rows * self.cell_size + 2.0 * BOARD_MARGIN,
        );

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter, board);

        // Draw placed stones
        self.draw_stones(&painter, board);

        // Draw last move marker
        if let Some(index) = last_move {
            self.draw_last_move_marker(&painter, board, index);
        }

        // Draw winning line highlight
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, board, line);
        }

        // Handle hover preview and click
        let mut clicked_cell = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(index) = self.screen_to_cell(board, pointer_pos) {
                    let is_valid = board.is_empty(index);
                    self.draw_hover_preview(&painter, board, index, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_cell = Some(index);
                    }
                }
            }
        }

        clicked_cell
    }

    /// Draw the cell grid
    fn draw_grid(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let width = board.cols() as f32 * self.cell_size;
        let height = board.rows() as f32 * self.cell_size;

        for row in 0..=board.rows() {
            let y = origin.y + row as f32 * self.cell_size;
            painter.line_segment([Pos2::new(origin.x, y), Pos2::new(origin.x + width, y)], stroke);
        }

        for col in 0..=board.cols() {
            let x = origin.x + col as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)], stroke);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for index in 0..board.len() {
            let stone = board.get(index);
            if stone != Stone::Empty {
                self.draw_stone(painter, board, index, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, board: &Board, index: usize, stone: Stone) {
        let center = self.cell_center(board, index);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        match stone {
            Stone::Black => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                // Main stone
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(1.5, 1.5),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );

                // Main stone
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, board: &Board, index: usize) {
        let center = self.cell_center(board, index);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight through the returned run
    fn draw_winning_line(&self, painter: &Painter, board: &Board, line: &[usize]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.cell_center(board, pair[0]);
            let end = self.cell_center(board, pair[1]);
            painter.line_segment([start, end], stroke);
        }

        // Draw circles around winning stones
        for &index in line {
            let center = self.cell_center(board, index);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(
        &self,
        painter: &Painter,
        board: &Board,
        index: usize,
        turn: Stone,
        is_valid: bool,
    ) {
        let center = self.cell_center(board, index);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, board: &Board, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if col >= 0 && col < board.cols() as i32 && row >= 0 && row < board.rows() as i32 {
            Some(row as usize * board.cols() + col as usize)
        } else {
            None
        }
    }

    /// Convert a cell index to the screen position of its center
    pub fn cell_center(&self, board: &Board, index: usize) -> Pos2 {
        let x = self.board_rect.min.x
            + BOARD_MARGIN
            + (board.col_of(index) as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y
            + BOARD_MARGIN
            + (board.row_of(index) as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
