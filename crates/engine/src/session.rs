//! Contracts for the simulation engine.
//!
//! `R` is the render target. The scheduler only ever passes it through.

use crate::types::{Direction, GridDims};

/// One live simulation instance.
pub trait Session<R: ?Sized> {
    /// Advance exactly one tick and draw the result into `target`.
    fn step(&mut self, target: &mut R, direction: Direction);

    /// Whether the session has ended. Pure; may be called any number of times.
    fn is_terminal(&self) -> bool;
}

/// Builds fresh sessions.
///
/// Construction is infallible for valid (non-zero) dimensions. A new session is
/// expected to draw its initial state into `target`.
pub trait SessionFactory<R: ?Sized> {
    type Session: Session<R>;

    fn new_session(&mut self, target: &mut R, dims: GridDims) -> Self::Session;
}

impl<R, S, F> SessionFactory<R> for F
where
    R: ?Sized,
    S: Session<R>,
    F: FnMut(&mut R, GridDims) -> S,
{
    type Session = S;

    fn new_session(&mut self, target: &mut R, dims: GridDims) -> S {
        self(target, dims)
    }
}
