//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, scheduling, terminal rendering).
//!
//! # Board Dimensions
//!
//! A session is created with a [`GridDims`]: the cell size followed by the board
//! width and height in cells. The default game is `20 x 20` cells of size 20.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STEP_LENGTH_MS` | 100 | Minimum time between simulation advances |
//! | `FRAME_INTERVAL_MS` | 16 | Terminal frame heartbeat (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GridDims, DEFAULT_BOARD_WIDTH};
//!
//! let dir = Direction::from_key_name("ArrowLeft").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//! assert_eq!(Direction::from_key_name("x"), None);
//!
//! let dims = GridDims::default();
//! assert_eq!(dims.width, DEFAULT_BOARD_WIDTH);
//! ```

/// Timestamp or duration in milliseconds, as delivered by the frame source.
pub type Millis = u64;

/// Minimum elapsed time between two simulation advances (100ms)
pub const STEP_LENGTH_MS: Millis = 100;

/// Default frame heartbeat for the terminal frame source (16ms ≈ 60 FPS)
pub const FRAME_INTERVAL_MS: Millis = 16;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u32 = 20;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u32 = 20;

/// Default cell size in pixels (a terminal glyph is treated as 10x20 pixels)
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Tail segments behind the head when a session starts
pub const INITIAL_TAIL_LEN: u32 = 2;

/// Rows between the board center and the spawn row of the head
pub const HEAD_SPAWN_OFFSET: u32 = 3;

/// Rows between the head and the first food at spawn
pub const FOOD_SPAWN_OFFSET: u32 = 4;


/// The four steering directions.
///
/// The snake moves in screen coordinates: rows grow downwards, columns grow
/// to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a browser-style key name.
    ///
    /// Only the four arrow key names are recognized; the match is exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_key_name("ArrowUp"), Some(Direction::Up));
    /// assert_eq!(Direction::from_key_name("ArrowRight"), Some(Direction::Right));
    /// assert_eq!(Direction::from_key_name("Enter"), None);
    /// ```
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Browser-style key name for this direction
    pub fn key_name(&self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row/column delta of one move in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A board cell position (row, column), origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: u32,
    pub col: u32,
}

impl Pos {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Neighbor one step away, or `None` when it would leave the first quadrant.
    ///
    /// Upper bounds are the board's concern, not the position's.
    pub fn offset(&self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Pos { row, col })
    }
}

/// Fixed dimensions a session is created with.
///
/// Mirrors the engine factory's `(cell_size, width, height)` argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    /// Size of one board cell in pixels.
    pub cell_size: u32,
    /// Board width in cells.
    pub width: u32,
    /// Board height in cells.
    pub height: u32,
}

impl GridDims {
    pub const fn new(cell_size: u32, width: u32, height: u32) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The head left the board or ran into the tail.
    Crashed,
    /// The snake filled the board; no free cell remains for food.
    Won,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Crashed => "crashed",
            Outcome::Won => "won",
        }
    }
}
