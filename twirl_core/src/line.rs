// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger line segments and the angle between them.

use kurbo::{Line, Point};

/// The segment between the primary finger (`p0`) and the secondary finger
/// (`p1`) at one moment.
///
/// The endpoint order is part of the value: swapping fingers turns the
/// heading by half a turn, which is what makes the reported rotation sign
/// depend on which finger touched first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedLine(pub Line);

impl TrackedLine {
    /// Creates a line from the primary and secondary finger positions.
    #[inline]
    #[must_use]
    pub fn new(primary: Point, secondary: Point) -> Self {
        Self(Line::new(primary, secondary))
    }

    /// Position of the primary finger.
    #[inline]
    #[must_use]
    pub fn primary(self) -> Point {
        self.0.p0
    }

    /// Position of the secondary finger.
    #[inline]
    #[must_use]
    pub fn secondary(self) -> Point {
        self.0.p1
    }

    /// Angle of `primary - secondary` against the positive x axis, in
    /// radians (`atan2` range).
    #[inline]
    #[must_use]
    pub fn heading(self) -> f64 {
        (self.0.p0 - self.0.p1).atan2()
    }

    /// Point halfway between the two fingers.
    #[inline]
    #[must_use]
    pub fn midpoint(self) -> Point {
        self.0.p0.midpoint(self.0.p1)
    }
}

/// Rotation from `reference` to `current`, in degrees.
///
/// Computed as `heading(reference) - heading(current)` and reduced with a
/// truncating remainder by 360. The result keeps its sign and may lie
/// anywhere in `(-360, 360)`; it is *not* normalized to `[0, 360)`.
#[must_use]
pub fn rotation_degrees(reference: TrackedLine, current: TrackedLine) -> f64 {
    (reference.heading() - current.heading()).to_degrees() % 360.0
}
