//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules and session state. It has **no
//! dependencies** on terminal I/O or scheduling, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run headless, in a terminal, or under a synthetic clock
//!
//! # Module Structure
//!
//! - [`board`]: Fixed-size occupancy grid with bounds checks
//! - [`game_state`]: One session: snake body, food, and win/loss detection
//! - [`rng`]: LCG used for food placement
//! - [`snapshot`]: Renderable copy of a session
//!
//! # Game Rules
//!
//! - The snake moves one cell per advance in its current direction
//! - A requested reversal onto the neck is ignored
//! - Eating food grows the snake by one segment and respawns food on a free cell
//! - Leaving the board or running into the tail ends the session
//! - Filling the board (no free cell left for food) ends the session as a win
//!
//! # Example
//!
//! ```
//! use tui_snake_core::SnakeGame;
//! use tui_snake_types::{Direction, GridDims};
//!
//! let mut game = SnakeGame::new(GridDims::new(20, 20, 20), 12345);
//! game.advance(Direction::Left);
//! assert_eq!(game.direction(), Direction::Left);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{Snake, SnakeGame};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
