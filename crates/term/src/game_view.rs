//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
const LOCKED: CellStyle = CellStyle::new(Rgb::new(80, 120, 220), WELL_BG);
const FALLING: CellStyle = CellStyle::new(Rgb::new(240, 150, 200), WELL_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

/// Draws the well, the falling piece, the score panel and the game-over
/// overlay.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let cols = snap.board.width() as u16;
        let rows = snap.board.height() as u16;
        let frame_w = cols * self.cell_w + 2;
        let frame_h = rows * self.cell_h + 2;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;
        let well = Well {
            x: origin_x + 1,
            y: origin_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (y, row) in snap.board.rows().enumerate() {
            for (x, &occupied) in row.iter().enumerate() {
                if occupied {
                    well.fill(fb, x as u16, y as u16, '█', LOCKED);
                } else {
                    well.fill(fb, x as u16, y as u16, '·', EMPTY);
                }
            }
        }

        // Cells above the top row are not drawn.
        for (x, y) in snap.active.board_cells() {
            if x >= 0 && y >= 0 && (x as u16) < cols && (y as u16) < rows {
                well.fill(fb, x as u16, y as u16, '█', FALLING);
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(8) <= viewport.width {
            let y = origin_y;
            fb.put_str(panel_x, y, "SCORE", LABEL);
            fb.put_u32(panel_x, y + 1, snap.score, VALUE);
            fb.put_str(panel_x, y + 3, "LINES", LABEL);
            fb.put_u32(panel_x, y + 4, snap.lines, VALUE);
        }

        if snap.game_over {
            let mid_y = origin_y + frame_h / 2;
            center_text(fb, origin_x, frame_w, mid_y, "GAME OVER");
            center_text(fb, origin_x, frame_w, mid_y + 1, "R restart  Q quit");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Screen placement of the board's cell grid.
struct Well {
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Well {
    fn fill(&self, fb: &mut FrameBuffer, cell_x: u16, cell_y: u16, ch: char, style: CellStyle) {
        let px = self.x + cell_x * self.cell_w;
        let py = self.y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
}

fn center_text(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, OVERLAY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameSnapshot};

    #[test]
    fn small_board_fits_exactly() {
        let mut snap = GameSnapshot::default();
        snap.board = Board::from_rows(3, 2, &["#..", "..."]);
        snap.active.x = 10;

        let fb = GameView::new(1, 1).render(&snap, Viewport::new(5, 4));
        assert_eq!(fb.to_text(), "┌───┐\n│█··│\n│···│\n└───┘\n");
    }

    #[test]
    fn panel_is_skipped_on_narrow_viewports() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert!(!fb.to_text().contains("SCORE"));
    }
}
