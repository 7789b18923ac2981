// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the rotation recognizer.
//!
//! [`TraceSink`] receives one call per interesting step of
//! [`RotationGestureDetector::process_event_traced`]: every consumed pointer
//! event, every rotate callback, and every event the recognizer had to skip.
//! All methods default to no-ops.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. With the `trace` feature
//! **off**, its methods compile to nothing; with it **on**, each call costs
//! one `Option` branch.
//!
//! Concrete sinks (pretty printing, binary recording, Chrome trace export)
//! live in the `twirl_debug` crate.
//!
//! [`RotationGestureDetector::process_event_traced`]: crate::rotate::RotationGestureDetector::process_event_traced

use kurbo::Point;

use crate::pointer::{ActionKind, PointerEvent};
use crate::rotate::RotatePhase;
use crate::time::EventTime;

/// Why an event did not advance the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// A tracked pointer identifier was missing from the event's pointer
    /// list.
    UnresolvedPointer,
    /// Both pointers were tracked but no reference line had been captured.
    MissingReference,
}

impl SkipReason {
    /// Short label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnresolvedPointer => "unresolved-pointer",
            Self::MissingReference => "missing-reference",
        }
    }
}

/// Emitted for every event handed to the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEventTrace {
    /// Event timestamp.
    pub time: EventTime,
    /// Which action the event carried.
    pub action: ActionKind,
    /// How many pointers were down.
    pub pointer_count: u32,
}

impl From<&PointerEvent<'_>> for PointerEventTrace {
    fn from(event: &PointerEvent<'_>) -> Self {
        Self {
            time: event.time,
            action: event.action.kind(),
            pointer_count: u32::try_from(event.pointer_count()).unwrap_or(u32::MAX),
        }
    }
}

/// Emitted right before a rotate callback runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateTrace {
    /// Timestamp of the event that triggered the callback.
    pub time: EventTime,
    /// Which callback.
    pub phase: RotatePhase,
    /// Rotation angle at this point, in radians.
    pub radians: f64,
    /// Current midpoint between the fingers.
    pub center: Point,
    /// Midpoint at the moment the second finger touched down.
    pub original_center: Point,
}

/// Emitted when an event is dropped by one of the recognizer's silent-skip
/// branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkipTrace {
    /// Timestamp of the skipped event.
    pub time: EventTime,
    /// Action of the skipped event.
    pub action: ActionKind,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Receives diagnostic events from the recognizer.
pub trait TraceSink {
    /// Called for every event passed to the recognizer, before it is handled.
    fn on_pointer_event(&mut self, e: &PointerEventTrace) {
        _ = e;
    }

    /// Called before each rotate callback.
    fn on_rotate(&mut self, e: &RotateTrace) {
        _ = e;
    }

    /// Called when an event is skipped.
    fn on_skip(&mut self, e: &SkipTrace) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PointerEventTrace`].
    #[inline]
    pub fn pointer_event(&mut self, e: &PointerEventTrace) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pointer_event(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RotateTrace`].
    #[inline]
    pub fn rotate(&mut self, e: &RotateTrace) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rotate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SkipTrace`].
    #[inline]
    pub fn skip(&mut self, e: &SkipTrace) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_skip(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::{Pointer, PointerAction, PointerId};

    #[test]
    fn pointer_event_trace_from_event() {
        let ps = [
            Pointer::new(PointerId(1), Point::ZERO),
            Pointer::new(PointerId(2), Point::new(5.0, 5.0)),
        ];
        let event = PointerEvent::new(EventTime(42), PointerAction::PointerDown(PointerId(2)), &ps);
        let t = PointerEventTrace::from(&event);
        assert_eq!(t.time, EventTime(42));
        assert_eq!(t.action, ActionKind::PointerDown);
        assert_eq!(t.pointer_count, 2);
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_pointer_event(&PointerEventTrace {
            time: EventTime::ZERO,
            action: ActionKind::Move,
            pointer_count: 0,
        });
        sink.on_skip(&SkipTrace {
            time: EventTime::ZERO,
            action: ActionKind::Move,
            reason: SkipReason::UnresolvedPointer,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.skip(&SkipTrace {
            time: EventTime::ZERO,
            action: ActionKind::PointerDown,
            reason: SkipReason::MissingReference,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct Skips(Vec<SkipReason>);
        impl TraceSink for Skips {
            fn on_skip(&mut self, e: &SkipTrace) {
                self.0.push(e.reason);
            }
        }

        let mut sink = Skips(Vec::new());
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.skip(&SkipTrace {
                time: EventTime(1),
                action: ActionKind::Move,
                reason: SkipReason::UnresolvedPointer,
            });
        }
        assert_eq!(sink.0, &[SkipReason::UnresolvedPointer]);
    }
}
