//! Board rendering for the Othello GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// What the board should highlight this frame
pub struct BoardOverlay<'a> {
    pub current_turn: Player,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub legal_moves: &'a [Pos],
    /// Accept clicks and show the hover preview
    pub interactive: bool,
    /// Seconds left before the AI replies
    pub countdown: Option<u64>,
}

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
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.grid_rect(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_disks(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if overlay.interactive {
            for &pos in overlay.legal_moves {
                painter.circle_filled(self.cell_center(pos), self.cell_size * HINT_RADIUS_RATIO, legal_hint());
            }
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, overlay.current_turn);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if overlay.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_legal = overlay.legal_moves.contains(&board_pos);
                    self.draw_hover_preview(&painter, board_pos, overlay.current_turn, is_legal);

                    if response.clicked() && is_legal {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        if let Some(secs) = overlay.countdown {
            self.draw_countdown(&painter, secs);
        }

        clicked_pos
    }

    fn grid_rect(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 8x8 cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let grid = self.grid_rect();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(grid.min.x + offset, grid.min.y), Pos2::new(grid.min.x + offset, grid.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(grid.min.x, grid.min.y + offset), Pos2::new(grid.max.x, grid.min.y + offset)],
                stroke,
            );
        }
    }

    /// Draw coordinate labels (a-h, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let grid = self.grid_rect();

        for i in 0..BOARD_SIZE {
            let center = (i as f32 + 0.5) * self.cell_size;

            let letter = (b'a' + i as u8) as char;
            let top = Pos2::new(grid.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_COLOR);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, grid.min.y + center);
            painter.text(left, egui::Align2::CENTER_CENTER, format!("{}", i + 1), font.clone(), LABEL_COLOR);
        }
    }

    /// Draw all disks
    fn draw_disks(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in board.cells() {
            if let Some(player) = cell.owner() {
                self.draw_disk(painter, pos, player);
            }
        }
    }

    /// Draw a single disk with visual polish
    fn draw_disk(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_DISK);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_DISK_HIGHLIGHT);
            }
            Player::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_DISK);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_DISK_SHADOW));
            }
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        let (fill, text) = match turn {
            Player::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_DISK),
            Player::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_DISK),
        };

        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(2.0, WIN_HIGHLIGHT));
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(18.0), text);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_legal: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        let color = if is_legal {
            match turn {
                Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 90),
                Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 90),
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Dim the board and show the seconds left before the AI replies
    fn draw_countdown(&self, painter: &Painter, secs: u64) {
        painter.rect_filled(self.grid_rect(), CornerRadius::ZERO, overlay_bg());
        painter.text(
            self.grid_rect().center(),
            egui::Align2::CENTER_CENTER,
            format!("AI moves in {secs}"),
            egui::FontId::proportional(self.cell_size * 0.6),
            TEXT_PRIMARY,
        );
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::try_new(col, row)
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let grid = self.grid_rect();
        Pos2::new(
            grid.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            grid.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}
