//! Game state module - one snake session
//!
//! This module ties together the board, the snake body, food placement and the
//! session lifecycle. A session starts running and ends exactly once, either by a
//! crash (wall or tail) or by filling the board. Ended sessions ignore further
//! advances; replacing them is the caller's job.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GridDims, Outcome, Pos, FOOD_SPAWN_OFFSET, HEAD_SPAWN_OFFSET, INITIAL_TAIL_LEN,
};
use crate::Board;

/// The snake body
///
/// `tail` runs from the tip (front) to the segment right behind the head (back).
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub head: Pos,
    pub tail: VecDeque<Pos>,
    pub direction: Direction,
}

impl Snake {
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Head first, then the tail from neck to tip
    pub fn segments(&self) -> impl Iterator<Item = Pos> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().rev().copied())
    }
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct SnakeGame {
    board: Board,
    snake: Snake,
    food: Option<Pos>,
    rng: SimpleRng,
    /// Scratch buffer for free-cell scans (reused across food placements).
    free: Vec<Pos>,
    steps: u64,
    outcome: Option<Outcome>,
}

impl SnakeGame {
    /// Create a new session on a board of the given dimensions.
    ///
    /// The head spawns three rows below the board center, facing up, with the
    /// tail straight below it and the first food four rows above the head. Boards
    /// too small for that layout get the head pulled up so the tail fits; a board
    /// without cells starts out crashed.
    pub fn new(dims: GridDims, seed: u32) -> Self {
        let mut board = Board::new(dims);
        let mut rng = SimpleRng::new(seed);

        let preferred_row = dims.height / 2 + HEAD_SPAWN_OFFSET;
        let head_row = preferred_row.min(dims.height.saturating_sub(1 + INITIAL_TAIL_LEN));
        if head_row != preferred_row {
            warn!(
                target: "core",
                "board {}x{} too small for default spawn, head moved to row {}",
                dims.width, dims.height, head_row
            );
        }
        let head = Pos::new(head_row, dims.width / 2);

        let mut tail = VecDeque::with_capacity(dims.area().max(INITIAL_TAIL_LEN as usize));
        for i in (1..=INITIAL_TAIL_LEN).rev() {
            let seg = Pos::new(head.row + i, head.col);
            if board.contains(seg) {
                tail.push_back(seg);
            }
        }

        let mut outcome = None;
        if board.contains(head) {
            board.set_occupied(head, true);
        } else {
            warn!(target: "core", "board {}x{} has no room for the snake", dims.width, dims.height);
            outcome = Some(Outcome::Crashed);
        }
        for &seg in &tail {
            board.set_occupied(seg, true);
        }

        let mut free = Vec::with_capacity(dims.area());
        let food = match head.row.checked_sub(FOOD_SPAWN_OFFSET) {
            Some(row) if !board.is_occupied(Pos::new(row, head.col)) => {
                Some(Pos::new(row, head.col))
            }
            _ if outcome.is_none() => {
                board.free_cells_into(&mut free);
                rng.choose(&free).copied()
            }
            _ => None,
        };

        Self {
            board,
            snake: Snake {
                head,
                tail,
                direction: Direction::Up,
            },
            food,
            rng,
            free,
            steps: 0,
            outcome,
        }
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn dims(&self) -> GridDims {
        self.board.dims()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Pos {
        self.snake.head
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn food(&self) -> Option<Pos> {
        self.food
    }

    /// Number of segments including the head
    pub fn length(&self) -> usize {
        self.snake.len()
    }

    /// Advances applied to this session (no-op advances after game over excluded)
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance the session by one tick.
    ///
    /// A direction that would reverse the snake onto itself is ignored and the
    /// snake keeps its heading.
    pub fn advance(&mut self, requested: Direction) {
        if self.game_over() {
            return;
        }
        self.steps += 1;

        if requested != self.snake.direction.opposite() {
            self.snake.direction = requested;
        }

        let next = match self.snake.head.offset(self.snake.direction) {
            Some(p) if self.board.contains(p) => p,
            _ => {
                self.finish(Outcome::Crashed);
                return;
            }
        };

        let eating = self.food == Some(next);
        if !eating {
            // The tip moves out of its cell in the same tick the head moves in.
            if let Some(tip) = self.snake.tail.pop_front() {
                self.board.set_occupied(tip, false);
            }
        }

        if self.board.is_occupied(next) {
            self.finish(Outcome::Crashed);
            return;
        }

        let old_head = self.snake.head;
        self.snake.tail.push_back(old_head);
        self.snake.head = next;
        self.board.set_occupied(next, true);

        if eating {
            self.board.free_cells_into(&mut self.free);
            self.food = self.rng.choose(&self.free).copied();
            if self.food.is_none() {
                self.finish(Outcome::Won);
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        debug!(
            target: "core",
            "session over ({}) after {} steps, length {}",
            outcome.as_str(),
            self.steps,
            self.length()
        );
        self.outcome = Some(outcome);
    }

    /// Copy the renderable state into `out`, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.dims = self.board.dims();
        out.head = self.snake.head;
        out.direction = self.snake.direction;
        out.tail.clear();
        out.tail.extend(self.snake.tail.iter().copied());
        out.food = self.food;
        out.outcome = self.outcome;
        out.steps = self.steps;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Pos>) {
        self.food = food;
    }
}
