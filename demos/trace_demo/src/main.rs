// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted two-finger twist that exercises the tracing and diagnostics
//! pipeline.
//!
//! Feeds a synthetic touch stream through the rotation detector, recording
//! events to both a [`PrettyPrintSink`](twirl_debug::pretty::PrettyPrintSink)
//! and a [`RecorderSink`](twirl_debug::recorder::RecorderSink), then exports
//! a Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Point;
use twirl_core::pointer::{Pointer, PointerAction, PointerId};
use twirl_core::rotate::{RotateLog, RotatePhase, RotationGestureDetector};
use twirl_core::time::EventTime;
use twirl_core::trace::{PointerEventTrace, RotateTrace, SkipTrace, TraceSink, Tracer};

use twirl_debug::pretty::PrettyPrintSink;
use twirl_debug::recorder::RecorderSink;
use twirl_debug::synth::GestureScript;

/// 8.33ms sampling interval in nanoseconds (≈120 Hz touch digitizer).
const SAMPLE_INTERVAL_NS: u64 = 8_333_333;

const THUMB: PointerId = PointerId(0);
const INDEX: PointerId = PointerId(1);

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_pointer_event(&mut self, e: &PointerEventTrace) {
        self.pretty.on_pointer_event(e);
        self.recorder.on_pointer_event(e);
    }

    fn on_rotate(&mut self, e: &RotateTrace) {
        self.pretty.on_rotate(e);
        self.recorder.on_rotate(e);
    }

    fn on_skip(&mut self, e: &SkipTrace) {
        self.pretty.on_skip(e);
        self.recorder.on_skip(e);
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout())).without_moves();
    let mut recorder = RecorderSink::new();

    // -- input -------------------------------------------------------------
    let center = Point::new(200.0, 300.0);
    let script = GestureScript::new(EventTime::from_millis(1_000), SAMPLE_INTERVAL_NS)
        // First gesture: a quarter turn, then half of it back.
        .down(THUMB, Point::new(150.0, 300.0))
        .down(INDEX, Point::new(250.0, 300.0))
        .twist(center, 90.0, 24);
    // A digitizer glitch: one move that drops the index finger.
    let glitch = vec![Pointer::new(THUMB, script.fingers()[0].position)];
    let events = script
        .raw(PointerAction::Move, glitch)
        .twist(center, -45.0, 12)
        .up(INDEX)
        .up(THUMB)
        // Second gesture: cancelled by the platform mid-twist.
        .down(INDEX, Point::new(200.0, 250.0))
        .down(THUMB, Point::new(200.0, 350.0))
        .twist(center, -30.0, 8)
        .cancel()
        .build();

    // -- detector ----------------------------------------------------------
    let mut detector = RotationGestureDetector::new(RotateLog::new());
    {
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        for scripted in &events {
            detector.process_event_traced(&scripted.as_event(), &mut tracer);
        }
    }

    let log = detector.into_listener();
    let gestures = log.phases().filter(|p| *p == RotatePhase::Begin).count();
    let final_degrees: Vec<_> = log
        .0
        .iter()
        .filter(|e| e.phase == RotatePhase::End)
        .map(|e| format!("{:.1}°", e.radians.to_degrees()))
        .collect();
    println!(
        "{} events, {gestures} gestures, ended at [{}]",
        events.len(),
        final_degrees.join(", "),
    );

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    twirl_debug::chrome::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path}");
}
