// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted multi-touch input.
//!
//! [`GestureScript`] builds a timeline of [`ScriptedEvent`]s the way a
//! touch platform would deliver them: the first finger down is a
//! [`Down`](PointerAction::Down), later fingers are
//! [`PointerDown`](PointerAction::PointerDown), the last finger up is an
//! [`Up`](PointerAction::Up), and every event carries the full pointer list.
//! Lifting events still include the lifting finger, as platforms do.
//!
//! Each event advances the clock by a fixed step.

use kurbo::{Affine, Point};
use twirl_core::pointer::{Pointer, PointerAction, PointerEvent, PointerId};
use twirl_core::time::EventTime;

/// An owned input event produced by a [`GestureScript`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedEvent {
    /// Event timestamp.
    pub time: EventTime,
    /// What happened.
    pub action: PointerAction,
    /// Pointers down at this moment, in slot order.
    pub pointers: Vec<Pointer>,
}

impl ScriptedEvent {
    /// Borrows this event as a [`PointerEvent`].
    #[must_use]
    pub fn as_event(&self) -> PointerEvent<'_> {
        PointerEvent::new(self.time, self.action, &self.pointers)
    }
}

/// Builder for a timeline of multi-touch events.
#[derive(Clone, Debug)]
pub struct GestureScript {
    events: Vec<ScriptedEvent>,
    fingers: Vec<Pointer>,
    now: EventTime,
    step_nanos: u64,
}

impl Default for GestureScript {
    /// Starts at time zero with a 60 Hz sampling step.
    fn default() -> Self {
        Self::new(EventTime::ZERO, 16_666_667)
    }
}

impl GestureScript {
    /// Creates an empty script whose first event is stamped `start`.
    #[must_use]
    pub fn new(start: EventTime, step_nanos: u64) -> Self {
        Self {
            events: Vec::new(),
            fingers: Vec::new(),
            now: start,
            step_nanos,
        }
    }

    fn push(&mut self, action: PointerAction, pointers: Vec<Pointer>) {
        self.events.push(ScriptedEvent {
            time: self.now,
            action,
            pointers,
        });
        self.now = self.now.saturating_add_nanos(self.step_nanos);
    }

    /// Puts a finger down at `at`.
    ///
    /// Emits `Down` if no finger is down yet, `PointerDown` otherwise. A
    /// finger that is already down is moved instead.
    #[must_use]
    pub fn down(mut self, id: PointerId, at: Point) -> Self {
        if self.fingers.iter().any(|p| p.id == id) {
            return self.move_to(id, at);
        }
        let action = if self.fingers.is_empty() {
            PointerAction::Down(id)
        } else {
            PointerAction::PointerDown(id)
        };
        self.fingers.push(Pointer::new(id, at));
        self.push(action, self.fingers.clone());
        self
    }

    /// Moves one finger to `to` and emits a `Move`.
    ///
    /// Unknown identifiers still produce the `Move`, with unchanged
    /// positions.
    #[must_use]
    pub fn move_to(mut self, id: PointerId, to: Point) -> Self {
        if let Some(p) = self.fingers.iter_mut().find(|p| p.id == id) {
            p.position = to;
        }
        self.push(PointerAction::Move, self.fingers.clone());
        self
    }

    /// Rotates every finger about `center` by `degrees`, spread over `steps`
    /// `Move` events.
    ///
    /// Positive degrees turn counter-clockwise as seen on screen (y grows
    /// downwards). Each step is computed from the positions at the start of
    /// the twist, so rounding does not accumulate.
    #[must_use]
    pub fn twist(mut self, center: Point, degrees: f64, steps: u32) -> Self {
        let start = self.fingers.clone();
        for step in 1..=steps {
            let angle = -(degrees * f64::from(step) / f64::from(steps)).to_radians();
            let rotate = Affine::rotate_about(angle, center);
            for (finger, origin) in self.fingers.iter_mut().zip(&start) {
                finger.position = rotate * origin.position;
            }
            self.push(PointerAction::Move, self.fingers.clone());
        }
        self
    }

    /// Lifts a finger.
    ///
    /// Emits `Up` if it is the last finger, `PointerUp` otherwise. The event
    /// still lists the lifting finger; later events do not. Unknown
    /// identifiers are ignored.
    #[must_use]
    pub fn up(mut self, id: PointerId) -> Self {
        let Some(slot) = self.fingers.iter().position(|p| p.id == id) else {
            return self;
        };
        let action = if self.fingers.len() == 1 {
            PointerAction::Up(id)
        } else {
            PointerAction::PointerUp(id)
        };
        self.push(action, self.fingers.clone());
        self.fingers.remove(slot);
        self
    }

    /// Emits a `Cancel` and forgets every finger.
    #[must_use]
    pub fn cancel(mut self) -> Self {
        let fingers = core::mem::take(&mut self.fingers);
        self.push(PointerAction::Cancel, fingers);
        self
    }

    /// Emits an arbitrary event without touching the tracked fingers.
    ///
    /// Useful for reproducing platform glitches such as a `Move` that omits a
    /// finger still known to be down.
    #[must_use]
    pub fn raw(mut self, action: PointerAction, pointers: Vec<Pointer>) -> Self {
        self.push(action, pointers);
        self
    }

    /// Fingers currently down, in slot order.
    #[must_use]
    pub fn fingers(&self) -> &[Pointer] {
        &self.fingers
    }

    /// Finishes the script.
    #[must_use]
    pub fn build(self) -> Vec<ScriptedEvent> {
        self.events
    }
}
