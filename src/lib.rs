//! Terminal Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces only
//! the binary needs: environment configuration and the terminal frame source.

pub mod config;
pub mod frames;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::{ConfigError, GameConfig};
pub use frames::TerminalFrames;
