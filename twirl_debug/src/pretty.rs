// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in microseconds.

use std::io::Write;

use kurbo::Point;
use twirl_core::trace::{PointerEventTrace, RotateTrace, SkipTrace, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    moves: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("moves", &self.moves)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            moves: true,
        }
    }

    /// Suppresses `[pointer] move` lines, which dominate long gestures.
    ///
    /// Rotate and skip lines for those moves are still printed.
    #[must_use]
    pub fn without_moves(mut self) -> Self {
        self.moves = false;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn fmt_point(p: Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pointer_event(&mut self, e: &PointerEventTrace) {
        if !self.moves && e.action == twirl_core::pointer::ActionKind::Move {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[pointer] {} pointers={} at {:.1}µs",
            e.action.as_str(),
            e.pointer_count,
            e.time.as_micros_f64(),
        );
    }

    fn on_rotate(&mut self, e: &RotateTrace) {
        let _ = writeln!(
            self.writer,
            "[rotate:{}] {:.4}rad ({:.1}°) center={} origin={} at {:.1}µs",
            e.phase.as_str(),
            e.radians,
            e.radians.to_degrees(),
            fmt_point(e.center),
            fmt_point(e.original_center),
            e.time.as_micros_f64(),
        );
    }

    fn on_skip(&mut self, e: &SkipTrace) {
        let _ = writeln!(
            self.writer,
            "[skip] {} reason={} at {:.1}µs",
            e.action.as_str(),
            e.reason.as_str(),
            e.time.as_micros_f64(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twirl_core::pointer::ActionKind;
    use twirl_core::rotate::RotatePhase;
    use twirl_core::time::EventTime;
    use twirl_core::trace::SkipReason;

    fn render(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_writer()).unwrap()
    }

    #[test]
    fn rotate_line() {
        let out = render(|s| {
            s.on_rotate(&RotateTrace {
                time: EventTime(2_500),
                phase: RotatePhase::Begin,
                radians: core::f64::consts::FRAC_PI_2,
                center: Point::new(5.0, 0.0),
                original_center: Point::new(5.0, 0.0),
            });
        });
        assert_eq!(
            out,
            "[rotate:begin] 1.5708rad (90.0°) center=(5.0, 0.0) origin=(5.0, 0.0) at 2.5µs\n"
        );
    }

    #[test]
    fn pointer_and_skip_lines() {
        let out = render(|s| {
            s.on_pointer_event(&PointerEventTrace {
                time: EventTime(1_000),
                action: ActionKind::PointerDown,
                pointer_count: 2,
            });
            s.on_skip(&SkipTrace {
                time: EventTime(3_000),
                action: ActionKind::Move,
                reason: SkipReason::UnresolvedPointer,
            });
        });
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "[pointer] pointer-down pointers=2 at 1.0µs");
        assert_eq!(lines[1], "[skip] move reason=unresolved-pointer at 3.0µs");
    }

    #[test]
    fn without_moves_filters_move_lines_only() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new()).without_moves();
        for action in [ActionKind::Move, ActionKind::Up] {
            sink.on_pointer_event(&PointerEventTrace {
                time: EventTime::ZERO,
                action,
                pointer_count: 1,
            });
        }
        let out = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("[pointer] up"));
    }
}
