use blockfall::core::{Board, GameConfig, GameSession, GameSnapshot};
use blockfall::term::{GameView, Viewport};

fn text(fb: &blockfall::term::FrameBuffer) -> String {
    fb.to_text()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::new(GameConfig::default(), 1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board = Board::from_rows(10, 20, &["#........."]);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let s = GameSession::new(GameConfig::default(), 1);
    let snap = s.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y) in snap.active.board_cells() {
        let px = 1 + x as u16 * 2;
        let py = 1 + y as u16;
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.ch, '█');
        assert!(cell.style.bold);
    }
}

#[test]
fn term_view_draws_score_panel_when_wide_enough() {
    let mut snap = GameSession::new(GameConfig::default(), 1).snapshot();
    snap.score = 1200;
    snap.lines = 12;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1200"));
    assert!(all.contains("LINES"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    assert!(!text(&GameView::default().render(&snap, Viewport::new(40, 24))).contains("GAME OVER"));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(40, 24));
    assert!(text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(26, 30));

    // 22x22 frame in 26x30 => offset (2, 4).
    assert_eq!(fb.get(2, 4).unwrap().ch, '┌');
}
