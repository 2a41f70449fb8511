use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameConfig, GameSession, GameSnapshot};
use blockfall::types::GameAction;

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::default(), 12345);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = GameSession::new(GameConfig::default(), 12345);
            }
            session.tick(black_box(true));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::default();
            board.lock_cells((16..20).flat_map(|y| (0..10).map(move |x| (x, y))));
            board.clear_full_rows()
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::default(), 12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            session.apply_action(GameAction::MoveLeft);
            session.apply_action(GameAction::MoveRight);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(GameConfig::default(), 12345);
    session.move_by(0, 5);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.rotate();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(GameConfig::default(), 12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
