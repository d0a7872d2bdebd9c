//! Fixed-cadence tick scheduler.
//!
//! The scheduler is driven once per host frame. It keeps the timestamp of the
//! last advance and, once more than `step_length` has passed, advances the live
//! session exactly once with the latched direction. Missed time is dropped, not
//! caught up: after a long stall the baseline jumps to the current frame and the
//! game simply runs slower. A session that reports terminal state is replaced in
//! the same frame with a fresh one built from the original dimensions.

use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::frame::FrameSource;
use crate::input::InputLatch;
use crate::session::{Session, SessionFactory};
use crate::types::{GridDims, Millis, STEP_LENGTH_MS};

/// What a single [`TickScheduler::on_frame`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// First frame: the clock baseline was recorded, nothing advanced.
    Primed,
    /// Not enough time has passed since the last advance.
    Idle,
    /// The session advanced one tick and is still running.
    Stepped,
    /// The session advanced, ended, and was replaced.
    Restarted,
}

impl FrameOutcome {
    /// Whether the session advanced (and therefore drew) during this frame.
    pub fn advanced(&self) -> bool {
        matches!(self, FrameOutcome::Stepped | FrameOutcome::Restarted)
    }
}

/// Details of a finished session, handed to the restart observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartNotice {
    /// Generation of the session that ended.
    pub ended_generation: u64,
    /// Advances the ended session received.
    pub session_steps: u64,
    /// Frame timestamp at which the session ended.
    pub timestamp: Millis,
}

type RestartObserver = Box<dyn FnMut(&RestartNotice)>;

pub struct TickScheduler<R: ?Sized, F: SessionFactory<R>> {
    factory: F,
    dims: GridDims,
    session: F::Session,
    latch: InputLatch,
    step_length: Millis,
    /// Timestamp of the last advance; `None` until the first frame.
    baseline: Option<Millis>,
    /// Identity of the live session, starting at 1.
    generation: u64,
    steps: u64,
    session_steps: u64,
    on_restart: Option<RestartObserver>,
    _target: PhantomData<fn(&mut R)>,
}

impl<R: ?Sized, F: SessionFactory<R>> TickScheduler<R, F> {
    /// Build the first session and a scheduler with the default step length.
    pub fn new(mut factory: F, target: &mut R, dims: GridDims, latch: InputLatch) -> Self {
        let session = factory.new_session(target, dims);
        debug!(
            target: "scheduler",
            "session 1 started ({}x{}, cell {})",
            dims.width, dims.height, dims.cell_size
        );
        Self {
            factory,
            dims,
            session,
            latch,
            step_length: STEP_LENGTH_MS,
            baseline: None,
            generation: 1,
            steps: 0,
            session_steps: 0,
            on_restart: None,
            _target: PhantomData,
        }
    }

    pub fn with_step_length(mut self, step_length: Millis) -> Self {
        self.step_length = step_length;
        self
    }

    /// Register a callback invoked after each restart.
    ///
    /// Restarts are otherwise silent; the callback must not block.
    pub fn with_restart_observer(mut self, observer: impl FnMut(&RestartNotice) + 'static) -> Self {
        self.on_restart = Some(Box::new(observer));
        self
    }

    pub fn current_session(&self) -> &F::Session {
        &self.session
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances across all sessions
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advances of the live session
    pub fn session_steps(&self) -> u64 {
        self.session_steps
    }

    pub fn baseline(&self) -> Option<Millis> {
        self.baseline
    }

    pub fn step_length(&self) -> Millis {
        self.step_length
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    /// Handle one host frame and re-arm the next one.
    ///
    /// Does at most one advance no matter how much time has passed. A timestamp
    /// earlier than the baseline counts as no time passed.
    pub fn on_frame<S>(&mut self, timestamp: Millis, target: &mut R, frames: &mut S) -> FrameOutcome
    where
        S: FrameSource + ?Sized,
    {
        let outcome = self.tick(timestamp, target);
        frames.request_frame();
        outcome
    }

    fn tick(&mut self, timestamp: Millis, target: &mut R) -> FrameOutcome {
        let Some(baseline) = self.baseline else {
            self.baseline = Some(timestamp);
            return FrameOutcome::Primed;
        };

        let elapsed = timestamp.saturating_sub(baseline);
        if elapsed <= self.step_length {
            return FrameOutcome::Idle;
        }

        self.baseline = Some(timestamp);
        let direction = self.latch.current();
        self.session.step(target, direction);
        self.steps += 1;
        self.session_steps += 1;
        trace!(target: "scheduler", "step {} at {}ms ({:?})", self.steps, timestamp, direction);

        if !self.session.is_terminal() {
            return FrameOutcome::Stepped;
        }

        self.restart(target, timestamp);
        FrameOutcome::Restarted
    }

    fn restart(&mut self, target: &mut R, timestamp: Millis) {
        let notice = RestartNotice {
            ended_generation: self.generation,
            session_steps: self.session_steps,
            timestamp,
        };

        self.session = self.factory.new_session(target, self.dims);
        self.generation += 1;
        self.session_steps = 0;
        debug!(
            target: "scheduler",
            "session {} ended after {} steps, session {} started",
            notice.ended_generation, notice.session_steps, self.generation
        );

        if let Some(observer) = self.on_restart.as_mut() {
            observer(&notice);
        }
    }

    /// Run until the frame source stops yielding frames.
    ///
    /// Arms the first frame, then calls [`Self::on_frame`] for every frame and
    /// `present` right after it. Returns the number of frames handled, or the
    /// first error `present` reports.
    pub fn drive<S, E>(
        &mut self,
        target: &mut R,
        frames: &mut S,
        mut present: impl FnMut(&mut R, FrameOutcome) -> Result<(), E>,
    ) -> Result<u64, E>
    where
        S: FrameSource + ?Sized,
    {
        frames.request_frame();
        let mut handled = 0u64;
        while let Some(timestamp) = frames.next_frame() {
            let outcome = self.on_frame(timestamp, target, frames);
            handled += 1;
            present(target, outcome)?;
        }
        debug!(target: "scheduler", "frame source closed after {} frames", handled);
        Ok(handled)
    }
}

impl<R: ?Sized, F: SessionFactory<R>> fmt::Debug for TickScheduler<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScheduler")
            .field("dims", &self.dims)
            .field("step_length", &self.step_length)
            .field("baseline", &self.baseline)
            .field("generation", &self.generation)
            .field("steps", &self.steps)
            .field("session_steps", &self.session_steps)
            .field("latch", &self.latch.current())
            .finish_non_exhaustive()
    }
}
