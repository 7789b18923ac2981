// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw multi-touch input model.
//!
//! A [`PointerEvent`] is one platform input event: an [`action`](PointerAction)
//! plus the full list of pointers that are down at that moment. Platform
//! glue (Android `MotionEvent`, web `TouchEvent`, winit touches) translates
//! its native events into this shape; the recognizer consumes nothing else.
//!
//! # Identifiers and slots
//!
//! Every finger carries a [`PointerId`] that stays the same for as long as the
//! finger is down. Its *slot* (the index into [`PointerEvent::pointers`]) is
//! not stable: lifting one finger shifts the slots of the others. Consumers
//! therefore keep identifiers and resolve them with
//! [`PointerEvent::find_index`] on every event.

use core::fmt;

use kurbo::Point;

use crate::time::EventTime;

/// A platform-assigned touch identifier, stable for the life of one contact.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub u32);

impl fmt::Debug for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointerId({})", self.0)
    }
}

/// One active finger in a single event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Stable identifier of the contact.
    pub id: PointerId,
    /// Position in view-local pixels (y grows downwards).
    pub position: Point,
}

impl Pointer {
    /// Creates a pointer sample.
    #[inline]
    #[must_use]
    pub const fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// What happened in a [`PointerEvent`].
///
/// The variants mirror the masked actions of multi-touch platforms: the first
/// finger to touch produces [`Down`](Self::Down), further fingers produce
/// [`PointerDown`](Self::PointerDown), and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The first finger touched down.
    Down(PointerId),
    /// An additional finger touched down while others are already down.
    PointerDown(PointerId),
    /// One or more of the active fingers moved.
    Move,
    /// The last remaining finger lifted.
    Up(PointerId),
    /// A finger lifted while others remain down.
    PointerUp(PointerId),
    /// The platform aborted the gesture (e.g. the view lost the touch stream).
    Cancel,
    /// Any action a rotation recognizer has no use for (hover, scroll, ...).
    Other,
}

impl PointerAction {
    /// Returns the payload-free kind of this action.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Self::Down(_) => ActionKind::Down,
            Self::PointerDown(_) => ActionKind::PointerDown,
            Self::Move => ActionKind::Move,
            Self::Up(_) => ActionKind::Up,
            Self::PointerUp(_) => ActionKind::PointerUp,
            Self::Cancel => ActionKind::Cancel,
            Self::Other => ActionKind::Other,
        }
    }

    /// Returns the pointer the action refers to, if it names one.
    #[inline]
    #[must_use]
    pub const fn pointer(self) -> Option<PointerId> {
        match self {
            Self::Down(id) | Self::PointerDown(id) | Self::Up(id) | Self::PointerUp(id) => {
                Some(id)
            }
            Self::Move | Self::Cancel | Self::Other => None,
        }
    }
}

/// [`PointerAction`] without its payload, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// See [`PointerAction::Down`].
    Down,
    /// See [`PointerAction::PointerDown`].
    PointerDown,
    /// See [`PointerAction::Move`].
    Move,
    /// See [`PointerAction::Up`].
    Up,
    /// See [`PointerAction::PointerUp`].
    PointerUp,
    /// See [`PointerAction::Cancel`].
    Cancel,
    /// See [`PointerAction::Other`].
    Other,
}

impl ActionKind {
    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::PointerDown => "pointer-down",
            Self::Move => "move",
            Self::Up => "up",
            Self::PointerUp => "pointer-up",
            Self::Cancel => "cancel",
            Self::Other => "other",
        }
    }
}

/// One multi-touch input event.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent<'a> {
    /// When the platform observed the event.
    pub time: EventTime,
    /// What happened.
    pub action: PointerAction,
    /// Every pointer down at this moment, in platform slot order.
    pub pointers: &'a [Pointer],
}

impl<'a> PointerEvent<'a> {
    /// Creates an event.
    #[inline]
    #[must_use]
    pub const fn new(time: EventTime, action: PointerAction, pointers: &'a [Pointer]) -> Self {
        Self {
            time,
            action,
            pointers,
        }
    }

    /// Resolves `id` to its slot index in this event.
    ///
    /// Returns `None` when the platform did not include the pointer, which
    /// happens on some devices when a move is delivered before the matching
    /// down or after the matching up.
    #[must_use]
    pub fn find_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Returns the position of the pointer with identifier `id`, if present.
    #[must_use]
    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers.iter().find(|p| p.id == id).map(|p| p.position)
    }

    /// Number of pointers carried by the event.
    #[inline]
    #[must_use]
    pub const fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PointerId = PointerId(7);
    const B: PointerId = PointerId(3);

    fn pointers() -> [Pointer; 2] {
        [
            Pointer::new(A, Point::new(1.0, 2.0)),
            Pointer::new(B, Point::new(3.0, 4.0)),
        ]
    }

    #[test]
    fn find_index_resolves_by_identifier_not_slot() {
        let ps = pointers();
        let event = PointerEvent::new(EventTime::ZERO, PointerAction::Move, &ps);
        assert_eq!(event.find_index(A), Some(0));
        assert_eq!(event.find_index(B), Some(1));
        assert_eq!(event.find_index(PointerId(0)), None);
    }

    #[test]
    fn slots_shift_but_ids_still_resolve() {
        let ps = [Pointer::new(B, Point::new(3.0, 4.0))];
        let event = PointerEvent::new(EventTime::ZERO, PointerAction::Move, &ps);
        assert_eq!(event.find_index(B), Some(0));
        assert_eq!(event.position_of(B), Some(Point::new(3.0, 4.0)));
        assert_eq!(event.position_of(A), None);
    }

    #[test]
    fn action_kind_and_pointer() {
        assert_eq!(PointerAction::PointerDown(A).kind(), ActionKind::PointerDown);
        assert_eq!(PointerAction::PointerUp(B).pointer(), Some(B));
        assert_eq!(PointerAction::Cancel.pointer(), None);
        assert_eq!(PointerAction::Other.kind().as_str(), "other");
    }

    #[test]
    fn pointer_count() {
        let ps = pointers();
        let event = PointerEvent::new(EventTime::ZERO, PointerAction::Move, &ps);
        assert_eq!(event.pointer_count(), 2);
    }
}
