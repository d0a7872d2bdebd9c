//! Frame source contract.
//!
//! A frame source is the scheduler's heartbeat. Requests are one-shot: each
//! [`FrameSource::request_frame`] arms exactly one future frame, and a source
//! that is not re-armed stops yielding frames. That is also how a host ends the
//! loop.

use std::collections::VecDeque;

use crate::types::Millis;

pub trait FrameSource {
    /// Arm one more frame.
    fn request_frame(&mut self);

    /// Wait for the armed frame and return its timestamp in milliseconds.
    ///
    /// Timestamps are non-decreasing across calls. Returns `None` when no frame
    /// is armed or the host has closed.
    fn next_frame(&mut self) -> Option<Millis>;
}

/// Deterministic frame source replaying a fixed list of timestamps.
///
/// Used wherever the scheduler must run without a terminal: tests, benchmarks,
/// headless replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrames {
    timestamps: VecDeque<Millis>,
    armed: bool,
    requests: u64,
    delivered: u64,
}

impl ScriptedFrames {
    pub fn new(timestamps: impl IntoIterator<Item = Millis>) -> Self {
        Self {
            timestamps: timestamps.into_iter().collect(),
            armed: false,
            requests: 0,
            delivered: 0,
        }
    }

    /// `count` frames spaced `interval` apart, starting at `start`.
    pub fn every(start: Millis, interval: Millis, count: usize) -> Self {
        Self::new((0..count as u64).map(|i| start + i * interval))
    }

    pub fn push(&mut self, timestamp: Millis) {
        self.timestamps.push_back(timestamp);
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Total `request_frame` calls so far
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Frames handed out so far
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn remaining(&self) -> usize {
        self.timestamps.len()
    }
}

impl FrameSource for ScriptedFrames {
    fn request_frame(&mut self) {
        self.requests += 1;
        self.armed = true;
    }

    fn next_frame(&mut self) -> Option<Millis> {
        if !self.armed {
            return None;
        }
        let ts = self.timestamps.pop_front()?;
        self.armed = false;
        self.delivered += 1;
        Some(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_source_yields_nothing() {
        let mut frames = ScriptedFrames::new([0, 16]);
        assert_eq!(frames.next_frame(), None);
        assert_eq!(frames.remaining(), 2);
    }

    #[test]
    fn one_request_one_frame() {
        let mut frames = ScriptedFrames::new([0, 16, 32]);
        frames.request_frame();
        frames.request_frame();
        assert_eq!(frames.next_frame(), Some(0));
        assert_eq!(frames.next_frame(), None);
        frames.request_frame();
        assert_eq!(frames.next_frame(), Some(16));
        assert_eq!(frames.requests(), 3);
        assert_eq!(frames.delivered(), 2);
    }

    #[test]
    fn exhausted_source_stays_armed() {
        let mut frames = ScriptedFrames::new([5]);
        frames.request_frame();
        assert_eq!(frames.next_frame(), Some(5));
        frames.request_frame();
        assert_eq!(frames.next_frame(), None);
        assert!(frames.is_armed());

        frames.push(9);
        assert_eq!(frames.next_frame(), Some(9));
    }

    #[test]
    fn every_spaces_frames_evenly() {
        let frames = ScriptedFrames::every(100, 16, 4);
        assert_eq!(
            frames.timestamps.iter().copied().collect::<Vec<_>>(),
            vec![100, 116, 132, 148]
        );
    }
}
