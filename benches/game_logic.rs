use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::SnakeGame;
use tui_snake::engine::{ScriptedFrames, TickScheduler};
use tui_snake::input::InputLatch;
use tui_snake::term::{FrameBuffer, GameView, HudInfo, TermSessionFactory, Viewport};
use tui_snake::types::{Direction, GridDims};

fn bench_advance(c: &mut Criterion) {
    let dims = GridDims::new(20, 64, 64);

    c.bench_function("snake_advance", |b| {
        let mut game = SnakeGame::new(dims, 12345);
        let mut turn = 0u32;
        b.iter(|| {
            if game.game_over() {
                game = SnakeGame::new(dims, 12345);
            }
            // Circle in a small square so the game runs for a while.
            turn = turn.wrapping_add(1);
            let dir = match (turn / 4) % 4 {
                0 => Direction::Up,
                1 => Direction::Left,
                2 => Direction::Down,
                _ => Direction::Right,
            };
            game.advance(black_box(dir));
        })
    });
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("snake_new_game", |b| {
        b.iter(|| SnakeGame::new(black_box(GridDims::default()), 12345))
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = SnakeGame::new(GridDims::default(), 12345).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), HudInfo { game: 1 }, Viewport::new(80, 24), &mut fb);
        })
    });
}

fn bench_scheduler_frames(c: &mut Criterion) {
    c.bench_function("scheduler_1000_frames", |b| {
        b.iter(|| {
            let mut fb = FrameBuffer::new(80, 24);
            let mut s = TickScheduler::new(
                TermSessionFactory::new(12345),
                &mut fb,
                GridDims::default(),
                InputLatch::new(),
            );
            let mut frames = ScriptedFrames::every(0, 16, 1000);
            s.drive(&mut fb, &mut frames, |_, _| Ok::<(), ()>(()))
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_new_game,
    bench_render,
    bench_scheduler_frames
);
criterion_main!(benches);
