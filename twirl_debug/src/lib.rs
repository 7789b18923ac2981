// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, Chrome trace export, and scripted input for
//! twirl diagnostics.
//!
//! This crate provides [`TraceSink`](twirl_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes.
//!
//! [`synth::GestureScript`] produces platform-shaped multi-touch event
//! timelines for tests and demos.

pub mod chrome;
pub mod pretty;
pub mod recorder;
pub mod synth;
