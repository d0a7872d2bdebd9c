//! Scheduler driving real snake sessions into a framebuffer.

use std::cell::RefCell;
use std::rc::Rc;

use tui_snake::engine::{FrameOutcome, FrameSource, RestartNotice, ScriptedFrames, TickScheduler};
use tui_snake::input::InputLatch;
use tui_snake::term::{FrameBuffer, TermSessionFactory};
use tui_snake::types::{Direction, GridDims, Pos};

fn setup(fb: &mut FrameBuffer, latch: &InputLatch) -> TickScheduler<FrameBuffer, TermSessionFactory> {
    TickScheduler::new(
        TermSessionFactory::new(7),
        fb,
        GridDims::new(20, 20, 20),
        latch.clone(),
    )
}

#[test]
fn test_first_session_is_drawn_before_any_frame() {
    let mut fb = FrameBuffer::new(80, 24);
    let s = setup(&mut fb, &InputLatch::new());

    assert_eq!(s.generation(), 1);
    assert_eq!(s.current_session().game_number(), 1);
    assert!(fb.cells().iter().any(|c| c.ch == '█'));
    assert!((0..fb.height()).any(|y| fb.row_text(y).contains("GAME")));
}

#[test]
fn test_cadence_with_16ms_frames() {
    let mut fb = FrameBuffer::new(80, 24);
    let mut s = setup(&mut fb, &InputLatch::new());
    // 0..=992ms: advances at 112, 224, ..., 896.
    let mut frames = ScriptedFrames::every(0, 16, 63);

    let handled = s.drive(&mut fb, &mut frames, |_, _| Ok::<(), ()>(())).unwrap();

    assert_eq!(handled, 63);
    assert_eq!(s.steps(), 8);
    assert_eq!(s.generation(), 1);
    assert_eq!(s.current_session().game().head(), Pos::new(5, 10));
}

#[test]
fn test_wall_crash_restarts_with_fresh_game() {
    let mut fb = FrameBuffer::new(80, 24);
    let mut s = setup(&mut fb, &InputLatch::new());
    // Prime, then one advance per frame. Heading up from row 13, the 14th
    // advance leaves the board.
    let mut frames = ScriptedFrames::every(0, 101, 15);

    let mut outcomes = Vec::new();
    s.drive(&mut fb, &mut frames, |_, outcome| {
        outcomes.push(outcome);
        Ok::<(), ()>(())
    })
    .unwrap();

    assert_eq!(outcomes[0], FrameOutcome::Primed);
    assert!(outcomes[1..14].iter().all(|o| *o == FrameOutcome::Stepped));
    assert_eq!(outcomes[14], FrameOutcome::Restarted);

    assert_eq!(s.generation(), 2);
    assert_eq!(s.session_steps(), 0);
    assert_eq!(s.steps(), 14);

    let game = s.current_session().game();
    assert_eq!(s.current_session().game_number(), 2);
    assert!(!game.game_over());
    assert_eq!(game.dims(), GridDims::new(20, 20, 20));
    assert_eq!(game.head(), Pos::new(13, 10));
    assert_eq!(game.length(), 3);
}

#[test]
fn test_restart_observer_sees_ended_session() {
    let mut fb = FrameBuffer::new(80, 24);
    let seen: Rc<RefCell<Vec<RestartNotice>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut s = setup(&mut fb, &InputLatch::new())
        .with_restart_observer(move |notice| sink.borrow_mut().push(*notice));

    let mut frames = ScriptedFrames::every(0, 101, 15);
    s.drive(&mut fb, &mut frames, |_, _| Ok::<(), ()>(())).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        RestartNotice {
            ended_generation: 1,
            session_steps: 14,
            timestamp: 14 * 101,
        }
    );
}

#[test]
fn test_latched_direction_steers_next_advance() {
    let mut fb = FrameBuffer::new(80, 24);
    let latch = InputLatch::new();
    let mut s = setup(&mut fb, &latch);
    let mut frames = ScriptedFrames::new([0, 101, 202, 303]);

    frames.request_frame();
    let ts = frames.next_frame().unwrap();
    s.on_frame(ts, &mut fb, &mut frames);

    latch.observe("ArrowLeft");
    let ts = frames.next_frame().unwrap();
    assert_eq!(s.on_frame(ts, &mut fb, &mut frames), FrameOutcome::Stepped);
    assert_eq!(s.current_session().game().head(), Pos::new(13, 9));
    assert_eq!(s.current_session().game().direction(), Direction::Left);

    // Reversal is ignored by the game; it keeps going left.
    latch.observe("ArrowRight");
    let ts = frames.next_frame().unwrap();
    s.on_frame(ts, &mut fb, &mut frames);
    assert_eq!(s.current_session().game().head(), Pos::new(13, 8));

    latch.observe("ArrowUp");
    latch.observe("Space");
    let ts = frames.next_frame().unwrap();
    s.on_frame(ts, &mut fb, &mut frames);
    assert_eq!(s.current_session().game().head(), Pos::new(12, 8));
}

#[test]
fn test_same_seed_replays_same_games() {
    let mut fb_a = FrameBuffer::new(80, 24);
    let mut fb_b = FrameBuffer::new(80, 24);
    let mut a = setup(&mut fb_a, &InputLatch::new());
    let mut b = setup(&mut fb_b, &InputLatch::new());

    let mut frames_a = ScriptedFrames::every(0, 101, 40);
    let mut frames_b = ScriptedFrames::every(0, 101, 40);
    a.drive(&mut fb_a, &mut frames_a, |_, _| Ok::<(), ()>(())).unwrap();
    b.drive(&mut fb_b, &mut frames_b, |_, _| Ok::<(), ()>(())).unwrap();

    assert_eq!(a.generation(), b.generation());
    assert_eq!(
        a.current_session().game().snapshot(),
        b.current_session().game().snapshot()
    );
    assert_eq!(fb_a, fb_b);
}
