//! Frame scheduler and session lifecycle.
//!
//! This crate decides *when* the simulation advances and *with what input*, and
//! replaces a session the moment it ends. It knows nothing about snakes or
//! terminals: the engine is reached through [`Session`] / [`SessionFactory`],
//! the render target is an opaque type parameter, and the heartbeat comes from a
//! [`FrameSource`].
//!
//! # Module Structure
//!
//! - [`session`]: Contracts for the simulation engine collaborator
//! - [`frame`]: Frame source contract plus a scripted, deterministic clock
//! - [`scheduler`]: [`TickScheduler`], the fixed-cadence loop
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{ScriptedFrames, Session, TickScheduler};
//! use tui_snake_input::InputLatch;
//! use tui_snake_types::{Direction, GridDims};
//!
//! struct Counter {
//!     steps: u32,
//! }
//!
//! impl Session<Vec<Direction>> for Counter {
//!     fn step(&mut self, target: &mut Vec<Direction>, direction: Direction) {
//!         self.steps += 1;
//!         target.push(direction);
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         self.steps >= 2
//!     }
//! }
//!
//! let latch = InputLatch::new();
//! let mut drawn = Vec::new();
//! let factory = |_: &mut Vec<Direction>, _: GridDims| Counter { steps: 0 };
//! let mut scheduler = TickScheduler::new(factory, &mut drawn, GridDims::default(), latch.clone());
//!
//! latch.observe("ArrowLeft");
//! let mut frames = ScriptedFrames::new([0, 50, 120, 240, 360]);
//! let frame_count = scheduler
//!     .drive(&mut drawn, &mut frames, |_, _| Ok::<(), ()>(()))
//!     .unwrap();
//!
//! assert_eq!(frame_count, 5);
//! assert_eq!(drawn, vec![Direction::Left; 3]);
//! assert_eq!(scheduler.generation(), 2);
//! ```

pub mod frame;
pub mod scheduler;
pub mod session;

pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use frame::{FrameSource, ScriptedFrames};
pub use scheduler::{FrameOutcome, RestartNotice, TickScheduler};
pub use session::{Session, SessionFactory};
