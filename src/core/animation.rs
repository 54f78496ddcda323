//! Frame-by-frame marker playback along a sampled path.
//!
//! The marker walks the path one sample per frame, forward only, and stops
//! on the last sample. Playback is driven by a cooperative frame clock: the
//! caller feeds elapsed time and the animation steps once a fixed interval
//! has passed.

use std::vec;

use crate::core::series::SampleSeries;

pub const FRAME_INTERVAL_S: f64 = 0.010;

#[derive(Debug)]
pub struct MarkerAnimation {
    frames: vec::IntoIter<(f64, f64)>,
    total_frames: usize,
    shown_frames: usize,
    current: Option<(f64, f64)>,
    interval_s: f64,
    pending_s: f64,
}

impl MarkerAnimation {
    pub fn new(path: SampleSeries) -> Self {
        Self::with_interval(path, FRAME_INTERVAL_S)
    }

    pub fn with_interval(path: SampleSeries, interval_s: f64) -> Self {
        let total_frames = path.len();
        Self {
            frames: path.into_points().into_iter(),
            total_frames,
            shown_frames: 0,
            current: None,
            interval_s: interval_s.max(0.0),
            pending_s: 0.0,
        }
    }

    /// Advances the clock by `dt_s` and returns the marker position to draw.
    ///
    /// The first call shows frame 0 without waiting for an interval. Later
    /// calls step at most one sample, so every sample is drawn even when the
    /// display frame is longer than the interval. Playback then runs slower
    /// than real time.
    pub fn advance(&mut self, dt_s: f64) -> Option<(f64, f64)> {
        if self.shown_frames == 0 {
            self.current = self.frames.next();
            if self.current.is_some() {
                self.shown_frames = 1;
            }
            return self.current;
        }

        self.pending_s += dt_s.max(0.0);
        if self.pending_s < self.interval_s {
            return self.current;
        }

        match self.frames.next() {
            Some(point) => {
                self.current = Some(point);
                self.shown_frames += 1;
                // Carry at most one interval so a long frame cannot queue a burst.
                self.pending_s = (self.pending_s - self.interval_s).min(self.interval_s);
            }
            None => self.pending_s = 0.0,
        }
        self.current
    }

    pub fn marker(&self) -> Option<(f64, f64)> {
        self.current
    }

    /// Index of the frame on screen, if any has been shown yet.
    pub fn frame_index(&self) -> Option<usize> {
        self.shown_frames.checked_sub(1)
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    pub fn is_finished(&self) -> bool {
        self.shown_frames == self.total_frames
    }

    pub fn progress(&self) -> f64 {
        if self.total_frames == 0 {
            1.0
        } else {
            self.shown_frames as f64 / self.total_frames as f64
        }
    }
}
