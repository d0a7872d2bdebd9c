//! Terminal frame source.
//!
//! Produces a frame every `interval` while pumping crossterm events in between:
//! steering keys go into the [`InputLatch`], quit keys and a broken event stream
//! close the source. Timestamps are milliseconds since the source was created.
//! Resizes are picked up by the presenter, which polls the terminal size.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, warn};

use crate::engine::FrameSource;
use crate::input::{should_quit, InputLatch};
use crate::types::Millis;

pub struct TerminalFrames {
    latch: InputLatch,
    interval: Duration,
    origin: Instant,
    last_frame: Instant,
    armed: bool,
    closed: bool,
}

impl TerminalFrames {
    pub fn new(latch: InputLatch, interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            latch,
            interval,
            origin: now,
            last_frame: now,
            armed: false,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn handle(&mut self, ev: Event) {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    debug!(target: "frames", "quit requested");
                    self.closed = true;
                } else {
                    self.latch.observe(&key);
                }
            }
            Event::Resize(w, h) => {
                debug!(target: "frames", "terminal resized to {}x{}", w, h);
            }
            _ => {}
        }
    }

    /// Pump events until `deadline` or until the source closes.
    fn pump_until(&mut self, deadline: Instant) {
        while !self.closed {
            let timeout = deadline.saturating_duration_since(Instant::now());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => self.handle(ev),
                    Err(e) => self.fail(e),
                },
                Ok(false) => return,
                Err(e) => self.fail(e),
            }
        }
    }

    fn fail(&mut self, e: std::io::Error) {
        warn!(target: "frames", "terminal event stream failed: {}", e);
        self.closed = true;
    }
}

impl FrameSource for TerminalFrames {
    fn request_frame(&mut self) {
        self.armed = true;
    }

    fn next_frame(&mut self) -> Option<Millis> {
        if !self.armed || self.closed {
            return None;
        }
        self.armed = false;

        let deadline = self.last_frame + self.interval;
        self.pump_until(deadline);
        if self.closed {
            return None;
        }

        self.last_frame = Instant::now();
        Some(self.last_frame.duration_since(self.origin).as_millis() as Millis)
    }
}
