//! Terminal binding of the snake engine to the scheduler contracts.
//!
//! A [`TermSession`] advances a [`SnakeGame`] and redraws it into the shared
//! [`FrameBuffer`] on every step; the framebuffer's current size is the
//! viewport. [`TermSessionFactory`] numbers sessions and hands each one a fresh
//! seed.

use tui_snake_engine::{Session, SessionFactory};

use crate::core::{GameSnapshot, SimpleRng, SnakeGame};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, HudInfo, Viewport};
use crate::types::{Direction, GridDims};

#[derive(Debug, Clone)]
pub struct TermSession {
    game: SnakeGame,
    view: GameView,
    hud: HudInfo,
    /// Reused between draws.
    snap: GameSnapshot,
}

impl TermSession {
    pub fn new(game: SnakeGame, game_number: u64) -> Self {
        let view = GameView::for_cell_size(game.dims().cell_size);
        Self {
            game,
            view,
            hud: HudInfo { game: game_number },
            snap: GameSnapshot::default(),
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    /// 1-based session number shown in the side panel
    pub fn game_number(&self) -> u64 {
        self.hud.game
    }

    pub fn draw(&mut self, fb: &mut FrameBuffer) {
        let viewport = Viewport::new(fb.width(), fb.height());
        self.game.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, self.hud, viewport, fb);
    }
}

impl Session<FrameBuffer> for TermSession {
    fn step(&mut self, target: &mut FrameBuffer, direction: Direction) {
        self.game.advance(direction);
        self.draw(target);
    }

    fn is_terminal(&self) -> bool {
        self.game.game_over()
    }
}

/// Builds and numbers terminal sessions.
#[derive(Debug, Clone)]
pub struct TermSessionFactory {
    seeds: SimpleRng,
    built: u64,
}

impl TermSessionFactory {
    /// Session seeds are drawn from an RNG seeded with `seed`, so a fixed seed
    /// replays the same sequence of games.
    pub fn new(seed: u32) -> Self {
        Self {
            seeds: SimpleRng::new(seed),
            built: 0,
        }
    }

    /// Sessions built so far
    pub fn built(&self) -> u64 {
        self.built
    }
}

impl SessionFactory<FrameBuffer> for TermSessionFactory {
    type Session = TermSession;

    fn new_session(&mut self, target: &mut FrameBuffer, dims: GridDims) -> TermSession {
        self.built += 1;
        let game = SnakeGame::new(dims, self.seeds.next_u32());
        let mut session = TermSession::new(game, self.built);
        session.draw(target);
        session
    }
}
