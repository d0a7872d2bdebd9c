//! Renderable copy of a session, decoupled from the engine internals.

use crate::types::{Direction, GridDims, Outcome, Pos};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub dims: GridDims,
    pub head: Pos,
    pub direction: Direction,
    /// Tail from tip to neck.
    pub tail: Vec<Pos>,
    pub food: Option<Pos>,
    pub outcome: Option<Outcome>,
    pub steps: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.dims = GridDims::default();
        self.head = Pos::default();
        self.direction = Direction::Up;
        self.tail.clear();
        self.food = None;
        self.outcome = None;
        self.steps = 0;
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn length(&self) -> usize {
        self.tail.len() + 1
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            dims: GridDims::default(),
            head: Pos::default(),
            direction: Direction::Up,
            tail: Vec::new(),
            food: None,
            outcome: None,
            steps: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_tail_capacity() {
        let mut snap = GameSnapshot::default();
        snap.tail.extend([Pos::new(1, 1), Pos::new(1, 2)]);
        snap.outcome = Some(Outcome::Crashed);
        let cap = snap.tail.capacity();
        snap.clear();
        assert!(snap.tail.is_empty());
        assert_eq!(snap.tail.capacity(), cap);
        assert!(!snap.game_over());
        assert_eq!(snap.length(), 1);
    }
}
