//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the key
//! types it maps. It filters raw key identifiers (crossterm key codes or
//! browser-style key names) down to the four steering directions and holds the
//! most recent one in an [`InputLatch`] for the scheduler to sample.

pub mod latch;
pub mod map;

pub use tui_snake_types as types;

pub use latch::{InputLatch, RawKey};
pub use map::{key_direction, should_quit};
