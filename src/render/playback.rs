//! Paced, cancellable replay of an emission trace.
//!
//! Algorithms return their full trace up front; animating it is a separate
//! concern. [`Playback`] walks a trace one cell at a time, optionally
//! sleeping between emissions and stopping as soon as its [`CancelToken`]
//! is set.

use super::PixelSink;
use crate::cancel::CancelToken;
use crate::color::Rgba;
use crate::geometry::GridPoint;
use std::time::Duration;

/// One emission of a replayed trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelEvent {
    /// Position of this emission in the trace.
    pub index: usize,
    /// Emitted cell.
    pub point: GridPoint,
    /// Color to plot it with.
    pub color: Rgba,
}

/// Restartable iterator over a trace of cells.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    cells: &'a [GridPoint],
    color: Rgba,
    delay: Duration,
    cancel: Option<CancelToken>,
    cursor: usize,
}

impl<'a> Playback<'a> {
    /// Replay `cells` in order with one color and no delay.
    #[must_use]
    pub fn new(cells: &'a [GridPoint], color: Rgba) -> Self {
        Self {
            cells,
            color,
            delay: Duration::ZERO,
            cancel: None,
            cursor: 0,
        }
    }

    /// Sleep this long between consecutive emissions.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Stop once `token` is cancelled.
    #[must_use]
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Rewind to the first emission.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Number of emissions already yielded.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Whether every emission has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.cells.len()
    }

    /// Plot the remaining emissions into `sink`. Returns how many were
    /// plotted before the trace ended or playback was cancelled.
    pub fn play<S: PixelSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut plotted = 0;
        for event in self.by_ref() {
            sink.set(event.point.x, event.point.y, event.color);
            plotted += 1;
        }
        plotted
    }
}

impl Iterator for Playback<'_> {
    type Item = PixelEvent;

    fn next(&mut self) -> Option<PixelEvent> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return None;
        }
        let point = *self.cells.get(self.cursor)?;
        if self.cursor > 0 && !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let event = PixelEvent {
            index: self.cursor,
            point,
            color: self.color,
        };
        self.cursor += 1;
        Some(event)
    }
}
