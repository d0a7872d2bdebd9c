//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! The framebuffer is also the render target the scheduler passes to every
//! session step; [`session`] binds the snake engine to that target.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudInfo, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use session::{TermSession, TermSessionFactory};
