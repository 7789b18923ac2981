// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger rotation recognition.
//!
//! [`RotationGestureDetector`] consumes [`PointerEvent`]s and reports a
//! rotation gesture to a [`RotateListener`]:
//!
//! ```text
//!   Down ──► PointerDown ──► Move ──► Move ... ──► Up / PointerUp / Cancel
//!    │           │            │        │                  │
//!    │     reference line   begin    rotate              end
//!  primary     captured
//! ```
//!
//! The angle reported with every callback is measured from the *reference
//! line* (the fingers' positions when the second finger touched down) to the
//! *current line*, recomputed from scratch on each move so it never drifts.
//!
//! # Gesture states
//!
//! | State              | primary | secondary | reference | rotating |
//! |--------------------|---------|-----------|-----------|----------|
//! | idle               | -       | -         | -         | no       |
//! | one down           | set     | -         | -         | no       |
//! | two down, still    | set     | set       | set       | no       |
//! | two down, rotating | set     | set       | set       | yes      |
//!
//! There is no minimum angle: the first move after the second finger lands
//! fires [`on_rotate_begin`](RotateListener::on_rotate_begin), even when the
//! fingers have not moved.
//!
//! # Robustness
//!
//! Nothing here can fail. Events whose tracked identifiers cannot be
//! resolved, moves without a reference line, stray ups and cancels, and
//! [`PointerAction::Other`] are all dropped silently. Some devices deliver a
//! move whose pointer list already lacks a finger that has not yet produced
//! its up, so these skips are expected in normal operation. Use
//! [`process_event_traced`](RotationGestureDetector::process_event_traced) to
//! observe them.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::line::{TrackedLine, rotation_degrees};
use crate::pointer::{PointerAction, PointerEvent, PointerId};
use crate::time::EventTime;
use crate::trace::{PointerEventTrace, RotateTrace, SkipReason, SkipTrace, Tracer};

/// Which rotate callback is being delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotatePhase {
    /// First movement after the second finger touched down.
    Begin,
    /// Any later movement while both fingers stay down.
    Move,
    /// A finger lifted or the platform cancelled the gesture.
    End,
}

impl RotatePhase {
    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Move => "move",
            Self::End => "end",
        }
    }
}

/// Read view of the recognizer's state, handed to every listener callback.
///
/// Values are live, not queued: read them inside the callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotateGesture {
    primary: Option<PointerId>,
    secondary: Option<PointerId>,
    reference_line: Option<TrackedLine>,
    current_line: Option<TrackedLine>,
    rotate_degrees: f64,
    rotating: bool,
}

impl RotateGesture {
    /// Midpoint between the fingers at the moment the second finger touched
    /// down, or the origin if no reference line has been captured.
    #[must_use]
    pub fn original_center_point(&self) -> Point {
        self.reference_line.map_or(Point::ZERO, TrackedLine::midpoint)
    }

    /// Midpoint between the fingers at the latest qualifying move, or the
    /// origin if there has been none.
    #[must_use]
    pub fn center_point(&self) -> Point {
        self.current_line.map_or(Point::ZERO, TrackedLine::midpoint)
    }

    /// Latest rotation angle in radians; zero before any has been computed.
    #[must_use]
    pub fn rotate_radians(&self) -> f64 {
        self.rotate_degrees.to_radians()
    }

    /// Latest rotation angle in degrees, in `(-360, 360)`.
    #[must_use]
    pub fn rotate_degrees(&self) -> f64 {
        self.rotate_degrees
    }

    /// Whether [`on_rotate_begin`](RotateListener::on_rotate_begin) has fired
    /// without a matching end yet.
    ///
    /// Already `false` inside [`on_rotate_end`](RotateListener::on_rotate_end).
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Identifier of the first finger, if tracked.
    #[must_use]
    pub fn primary(&self) -> Option<PointerId> {
        self.primary
    }

    /// Identifier of the second finger, if tracked.
    #[must_use]
    pub fn secondary(&self) -> Option<PointerId> {
        self.secondary
    }

    /// The line captured when the second finger touched down.
    #[must_use]
    pub fn reference_line(&self) -> Option<TrackedLine> {
        self.reference_line
    }

    /// The line observed at the latest qualifying move.
    #[must_use]
    pub fn current_line(&self) -> Option<TrackedLine> {
        self.current_line
    }

    /// Resolves both tracked identifiers against `event`.
    fn resolve(&self, event: &PointerEvent<'_>) -> Option<TrackedLine> {
        self.resolve_with(event, self.secondary?)
    }

    /// Resolves the primary identifier and a candidate secondary.
    fn resolve_with(
        &self,
        event: &PointerEvent<'_>,
        secondary: PointerId,
    ) -> Option<TrackedLine> {
        let primary = event.position_of(self.primary?)?;
        let secondary = event.position_of(secondary)?;
        Some(TrackedLine::new(primary, secondary))
    }

    fn clear_lines(&mut self) {
        self.reference_line = None;
        self.current_line = None;
    }

    fn trace(&self, time: EventTime, phase: RotatePhase) -> RotateTrace {
        RotateTrace {
            time,
            phase,
            radians: self.rotate_radians(),
            center: self.center_point(),
            original_center: self.original_center_point(),
        }
    }
}

/// Receives the rotation gesture stream.
///
/// Callbacks run synchronously inside
/// [`RotationGestureDetector::process_event`], on whatever thread called it.
/// They should return quickly; they sit on the input path.
pub trait RotateListener {
    /// The first move after the second finger touched down.
    ///
    /// [`RotateGesture::original_center_point`] is the pivot where the
    /// gesture started.
    fn on_rotate_begin(&mut self, gesture: &RotateGesture);

    /// A later move while both fingers remain down.
    fn on_rotate(&mut self, gesture: &RotateGesture);

    /// A finger lifted or the gesture was cancelled after a begin.
    ///
    /// The last center point and angle are still readable.
    fn on_rotate_end(&mut self, gesture: &RotateGesture);
}

impl<F> RotateListener for F
where
    F: FnMut(RotatePhase, &RotateGesture),
{
    fn on_rotate_begin(&mut self, gesture: &RotateGesture) {
        self(RotatePhase::Begin, gesture);
    }

    fn on_rotate(&mut self, gesture: &RotateGesture) {
        self(RotatePhase::Move, gesture);
    }

    fn on_rotate_end(&mut self, gesture: &RotateGesture) {
        self(RotatePhase::End, gesture);
    }
}

/// A copyable snapshot of one callback, for forwarding to a renderer or
/// another thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateEvent {
    /// Which callback produced the snapshot.
    pub phase: RotatePhase,
    /// Rotation angle in radians.
    pub radians: f64,
    /// Pivot point: the original center on [`Begin`](RotatePhase::Begin),
    /// the current center otherwise.
    pub center: Point,
}

impl RotateEvent {
    /// Snapshots `gesture` for the given callback.
    #[must_use]
    pub fn new(phase: RotatePhase, gesture: &RotateGesture) -> Self {
        let center = match phase {
            RotatePhase::Begin => gesture.original_center_point(),
            RotatePhase::Move | RotatePhase::End => gesture.center_point(),
        };
        Self {
            phase,
            radians: gesture.rotate_radians(),
            center,
        }
    }
}

/// A listener that appends a [`RotateEvent`] for every callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotateLog(pub Vec<RotateEvent>);

impl RotateLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The phases seen so far, in order.
    pub fn phases(&self) -> impl Iterator<Item = RotatePhase> + '_ {
        self.0.iter().map(|e| e.phase)
    }
}

impl RotateListener for RotateLog {
    fn on_rotate_begin(&mut self, gesture: &RotateGesture) {
        self.0.push(RotateEvent::new(RotatePhase::Begin, gesture));
    }

    fn on_rotate(&mut self, gesture: &RotateGesture) {
        self.0.push(RotateEvent::new(RotatePhase::Move, gesture));
    }

    fn on_rotate_end(&mut self, gesture: &RotateGesture) {
        self.0.push(RotateEvent::new(RotatePhase::End, gesture));
    }
}

/// Turns multi-touch pointer events into a rotation gesture stream.
///
/// One detector serves one touch surface for the surface's whole life; its
/// pointer and line state resets by itself whenever the two-finger contact is
/// broken. It is not synchronized: drive it from a single input thread.
pub struct RotationGestureDetector<L> {
    gesture: RotateGesture,
    listener: L,
}

impl<L> fmt::Debug for RotationGestureDetector<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationGestureDetector")
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl<L: RotateListener> RotationGestureDetector<L> {
    /// Creates a detector reporting to `listener`.
    #[must_use]
    pub fn new(listener: L) -> Self {
        Self {
            gesture: RotateGesture::default(),
            listener,
        }
    }

    /// Consumes one event, invoking listener callbacks as needed.
    ///
    /// Always returns `true`: the detector claims every event it is given.
    pub fn process_event(&mut self, event: &PointerEvent<'_>) -> bool {
        self.process_event_traced(event, &mut Tracer::none())
    }

    /// Like [`process_event`](Self::process_event), additionally reporting
    /// diagnostics to `tracer`.
    pub fn process_event_traced(
        &mut self,
        event: &PointerEvent<'_>,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        tracer.pointer_event(&PointerEventTrace::from(event));

        match event.action {
            PointerAction::Down(id) => {
                // A fresh first finger means the previous stream was lost.
                self.end_rotate(event.time, tracer);
                self.gesture.secondary = None;
                self.gesture.clear_lines();
                self.gesture.primary = Some(id);
            }
            PointerAction::PointerDown(id) => {
                // Nothing changes unless both fingers resolve.
                match self.gesture.resolve_with(event, id) {
                    Some(line) => {
                        self.gesture.secondary = Some(id);
                        self.gesture.reference_line = Some(line);
                    }
                    None => tracer.skip(&SkipTrace {
                        time: event.time,
                        action: event.action.kind(),
                        reason: SkipReason::UnresolvedPointer,
                    }),
                }
            }
            PointerAction::Move => self.handle_move(event, tracer),
            PointerAction::Up(_) => {
                self.gesture.primary = None;
                self.end_rotate(event.time, tracer);
                self.gesture.clear_lines();
            }
            PointerAction::PointerUp(_) => {
                self.gesture.secondary = None;
                self.end_rotate(event.time, tracer);
                self.gesture.clear_lines();
            }
            PointerAction::Cancel => {
                self.gesture.primary = None;
                self.gesture.secondary = None;
                self.end_rotate(event.time, tracer);
                self.gesture.clear_lines();
            }
            PointerAction::Other => {}
        }

        true
    }

    fn handle_move(&mut self, event: &PointerEvent<'_>, tracer: &mut Tracer<'_>) {
        if self.gesture.primary.is_none() || self.gesture.secondary.is_none() {
            return;
        }
        let skip = |reason| SkipTrace {
            time: event.time,
            action: event.action.kind(),
            reason,
        };
        let Some(current) = self.gesture.resolve(event) else {
            tracer.skip(&skip(SkipReason::UnresolvedPointer));
            return;
        };
        let Some(reference) = self.gesture.reference_line else {
            tracer.skip(&skip(SkipReason::MissingReference));
            return;
        };

        self.gesture.current_line = Some(current);
        self.gesture.rotate_degrees = rotation_degrees(reference, current);

        if self.gesture.rotating {
            tracer.rotate(&self.gesture.trace(event.time, RotatePhase::Move));
            self.listener.on_rotate(&self.gesture);
        } else {
            self.gesture.rotating = true;
            tracer.rotate(&self.gesture.trace(event.time, RotatePhase::Begin));
            self.listener.on_rotate_begin(&self.gesture);
        }
    }

    /// Ends an active rotation. The flag flips before the listener runs.
    fn end_rotate(&mut self, time: EventTime, tracer: &mut Tracer<'_>) {
        if !self.gesture.rotating {
            return;
        }
        self.gesture.rotating = false;
        tracer.rotate(&self.gesture.trace(time, RotatePhase::End));
        self.listener.on_rotate_end(&self.gesture);
    }
}

impl<L> RotationGestureDetector<L> {
    /// The recognizer's current state.
    #[must_use]
    pub fn gesture(&self) -> &RotateGesture {
        &self.gesture
    }

    /// See [`RotateGesture::original_center_point`].
    #[must_use]
    pub fn original_center_point(&self) -> Point {
        self.gesture.original_center_point()
    }

    /// See [`RotateGesture::center_point`].
    #[must_use]
    pub fn center_point(&self) -> Point {
        self.gesture.center_point()
    }

    /// See [`RotateGesture::rotate_radians`].
    #[must_use]
    pub fn rotate_radians(&self) -> f64 {
        self.gesture.rotate_radians()
    }

    /// See [`RotateGesture::is_rotating`].
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.gesture.rotating
    }

    /// Shared access to the listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Exclusive access to the listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the detector and returns its listener.
    #[must_use]
    pub fn into_listener(self) -> L {
        self.listener
    }
}
