//! Input latch: the last recognized steering key.
//!
//! The latch is a single `Cell<Direction>` behind a cloneable handle. The input
//! side writes it whenever a key arrives and the scheduler reads it once per
//! advance, so rapid presses between two advances collapse into the last one.
//! Being one `Copy` value it can never be observed half-written.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};

use crate::map::key_direction;
use crate::types::Direction;

/// A raw key identifier that may or may not name a steering direction.
pub trait RawKey {
    fn direction(&self) -> Option<Direction>;
}

/// Browser-style key names (`"ArrowUp"`, `"ArrowDown"`, ...).
impl RawKey for str {
    fn direction(&self) -> Option<Direction> {
        Direction::from_key_name(self)
    }
}

impl RawKey for String {
    fn direction(&self) -> Option<Direction> {
        Direction::from_key_name(self)
    }
}

impl RawKey for KeyCode {
    fn direction(&self) -> Option<Direction> {
        key_direction(*self)
    }
}

impl RawKey for KeyEvent {
    fn direction(&self) -> Option<Direction> {
        key_direction(self.code)
    }
}

impl RawKey for Direction {
    fn direction(&self) -> Option<Direction> {
        Some(*self)
    }
}

/// Shared single-slot direction latch.
///
/// Clones share the same slot; hand one to the input source and one to the
/// scheduler.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    slot: Rc<Cell<Direction>>,
}

impl InputLatch {
    /// Latch starting at the default direction (`Up`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(initial: Direction) -> Self {
        Self {
            slot: Rc::new(Cell::new(initial)),
        }
    }

    /// Latch `key` if it names a direction; anything else is ignored.
    ///
    /// Returns whether the key was recognized.
    pub fn observe<K: RawKey + ?Sized>(&self, key: &K) -> bool {
        match key.direction() {
            Some(dir) => {
                self.slot.set(dir);
                true
            }
            None => false,
        }
    }

    /// The last recognized direction, or the initial one.
    pub fn current(&self) -> Direction {
        self.slot.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_up() {
        assert_eq!(InputLatch::new().current(), Direction::Up);
        assert_eq!(
            InputLatch::with_initial(Direction::Left).current(),
            Direction::Left
        );
    }

    #[test]
    fn test_unrecognized_key_is_skipped() {
        let latch = InputLatch::new();
        assert!(latch.observe("ArrowLeft"));
        assert!(!latch.observe("x"));
        assert!(latch.observe("ArrowDown"));
        assert_eq!(latch.current(), Direction::Down);
    }

    #[test]
    fn test_last_writer_wins() {
        let latch = InputLatch::new();
        for key in ["ArrowRight", "ArrowLeft", "Shift", "ArrowDown", "ArrowUp", " "] {
            latch.observe(key);
        }
        assert_eq!(latch.current(), Direction::Up);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let writer = InputLatch::new();
        let reader = writer.clone();
        writer.observe(&KeyCode::Right);
        assert_eq!(reader.current(), Direction::Right);
        writer.observe(&KeyCode::Char('a'));
        assert_eq!(reader.current(), Direction::Right);
    }

    #[test]
    fn test_key_event_and_direction_keys() {
        let latch = InputLatch::new();
        latch.observe(&KeyEvent::from(KeyCode::Left));
        assert_eq!(latch.current(), Direction::Left);
        latch.observe(&Direction::Down);
        assert_eq!(latch.current(), Direction::Down);
        latch.observe(&String::from("ArrowRight"));
        assert_eq!(latch.current(), Direction::Right);
    }

    #[test]
    fn test_reads_do_not_consume() {
        let latch = InputLatch::new();
        latch.observe("ArrowLeft");
        assert_eq!(latch.current(), Direction::Left);
        assert_eq!(latch.current(), Direction::Left);
    }
}
