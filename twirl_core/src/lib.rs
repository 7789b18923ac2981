// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger rotation gesture recognition.
//!
//! `twirl_core` turns a stream of raw multi-touch pointer events into a
//! begin / rotate / end gesture stream carrying a signed rotation angle and a
//! pivot point. It is `no_std` compatible (with `alloc`), does no I/O, and
//! never fails: malformed or out-of-order input degrades to no-ops.
//!
//! # Architecture
//!
//! ```text
//!   platform touch event
//!       │  (translated by the caller)
//!       ▼
//!   PointerEvent ──► RotationGestureDetector::process_event()
//!                          │
//!                          ├──► RotateListener::on_rotate_begin / on_rotate / on_rotate_end
//!                          │         (reads RotateGesture: angle, centers)
//!                          │
//!                          └──► Tracer ──► TraceSink (optional diagnostics)
//! ```
//!
//! **[`pointer`]**: the input model. Pointer identifiers are stable across
//! events; slot indices are not, so identifiers are resolved on every event.
//!
//! **[`line`]**: two-finger line segments, their headings, and the angle
//! between a reference line and the current line.
//!
//! **[`rotate`]**: the recognizer state machine and its listener contract.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) and the zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`time`]**: input-clock timestamps carried through to diagnostics.
//!
//! # Example
//!
//! ```
//! use kurbo::Point;
//! use twirl_core::pointer::{Pointer, PointerAction, PointerEvent, PointerId};
//! use twirl_core::rotate::{RotateLog, RotatePhase, RotationGestureDetector};
//! use twirl_core::time::EventTime;
//!
//! let (a, b) = (PointerId(0), PointerId(1));
//! let mut detector = RotationGestureDetector::new(RotateLog::new());
//! let t = EventTime::ZERO;
//!
//! let first = Pointer::new(a, Point::new(0.0, 0.0));
//! detector.process_event(&PointerEvent::new(t, PointerAction::Down(a), &[first]));
//! let second = Pointer::new(b, Point::new(10.0, 0.0));
//! detector.process_event(&PointerEvent::new(t, PointerAction::PointerDown(b), &[first, second]));
//! let moved = Pointer::new(b, Point::new(0.0, -10.0));
//! detector.process_event(&PointerEvent::new(t, PointerAction::Move, &[first, moved]));
//!
//! let log = detector.into_listener();
//! assert_eq!(log.0[0].phase, RotatePhase::Begin);
//! assert!((log.0[0].radians - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod line;
pub mod pointer;
pub mod rotate;
pub mod time;
pub mod trace;
