//! Shared test infrastructure for rgb-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use rgb_strip::{Color, LedStrip, StopSignal};

// ============================================================================
// Mock Strip
// ============================================================================

/// Error returned by a failing mock strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockStripError;

/// Mock strip that records every rendered frame and reset
#[derive(Debug, Default)]
pub struct MockStrip {
    frames: Vec<Vec<Color>>,
    resets: usize,
    fail_on_frame: Option<usize>,
    stop_after: Option<(usize, Arc<StopSignal>)>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the render call with the given zero-based index
    pub fn failing_on(frame: usize) -> Self {
        Self {
            fail_on_frame: Some(frame),
            ..Self::default()
        }
    }

    /// Sets `signal` once `frames` frames have been rendered
    pub fn stopping_after(frames: usize, signal: Arc<StopSignal>) -> Self {
        Self {
            stop_after: Some((frames, signal)),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[Color]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl LedStrip for MockStrip {
    type Error = MockStripError;

    fn render(&mut self, frame: &[Color]) -> Result<(), MockStripError> {
        if self.fail_on_frame == Some(self.frames.len()) {
            return Err(MockStripError);
        }

        self.frames.push(frame.to_vec());

        if let Some((limit, signal)) = &self.stop_after {
            if self.frames.len() >= *limit {
                signal.stop();
            }
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), MockStripError> {
        self.resets += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested sleeps without sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: u64,
    calls: usize,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.calls += 1;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use rgb_strip::{BLACK, BLUE, GREEN, RED};
