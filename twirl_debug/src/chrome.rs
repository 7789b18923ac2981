// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Each rotate gesture becomes a `Rotate` duration slice (a `B` event at
//! begin, an `E` event at end) with its moves as instants inside it. Pointer
//! events and skips are instants on a separate thread row.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use twirl_core::rotate::RotatePhase;

use crate::recorder::{RecordedEvent, decode};

const INPUT_TID: u32 = 0;
const GESTURE_TID: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// An `End` with no open `Begin` (a lift that ended a gesture which never
/// began) is exported as an instant rather than an unbalanced `E`.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut open = false;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::PointerEvent(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": e.action.as_str(),
                    "cat": "Input",
                    "ts": e.time.as_micros_f64(),
                    "pid": 0,
                    "tid": INPUT_TID,
                    "s": "t",
                    "args": {
                        "pointers": e.pointer_count,
                    }
                }));
            }
            RecordedEvent::Rotate(e) => {
                let ph = match e.phase {
                    RotatePhase::Begin => {
                        open = true;
                        "B"
                    }
                    RotatePhase::End if open => {
                        open = false;
                        "E"
                    }
                    RotatePhase::Move | RotatePhase::End => "i",
                };
                let name = if ph == "i" {
                    format!("Rotate:{}", e.phase.as_str())
                } else {
                    "Rotate".to_owned()
                };
                let mut event = json!({
                    "ph": ph,
                    "name": name,
                    "cat": "Gesture",
                    "ts": e.time.as_micros_f64(),
                    "pid": 0,
                    "tid": GESTURE_TID,
                    "args": {
                        "radians": e.radians,
                        "degrees": e.radians.to_degrees(),
                        "center": [e.center.x, e.center.y],
                        "original_center": [e.original_center.x, e.original_center.y],
                    }
                });
                if ph == "i" {
                    event["s"] = json!("t");
                }
                events.push(event);
            }
            RecordedEvent::Skip(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Skip",
                    "cat": "Input",
                    "ts": e.time.as_micros_f64(),
                    "pid": 0,
                    "tid": INPUT_TID,
                    "s": "t",
                    "args": {
                        "action": e.action.as_str(),
                        "reason": e.reason.as_str(),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use kurbo::Point;
    use twirl_core::pointer::ActionKind;
    use twirl_core::time::EventTime;
    use twirl_core::trace::{PointerEventTrace, RotateTrace, SkipReason, SkipTrace, TraceSink};

    fn rotate(rec: &mut RecorderSink, micros: u64, phase: RotatePhase, radians: f64) {
        rec.on_rotate(&RotateTrace {
            time: EventTime(micros * 1_000),
            phase,
            radians,
            center: Point::new(5.0, 5.0),
            original_center: Point::new(5.0, 0.0),
        });
    }

    fn exported(rec: &RecorderSink) -> Vec<Value> {
        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_pointer_event(&PointerEventTrace {
            time: EventTime(1_000),
            action: ActionKind::Move,
            pointer_count: 2,
        });
        rotate(&mut rec, 1, RotatePhase::Begin, 0.0);
        rotate(&mut rec, 2, RotatePhase::Move, 0.5);
        rotate(&mut rec, 3, RotatePhase::End, 0.5);

        let parsed = exported(&rec);
        assert_eq!(parsed.len(), 4);

        assert_eq!(parsed[0]["ph"], "i");
        assert_eq!(parsed[0]["name"], "move");
        assert_eq!(parsed[0]["args"]["pointers"], 2);

        assert_eq!(parsed[1]["ph"], "B");
        assert_eq!(parsed[1]["name"], "Rotate");
        assert_eq!(parsed[1]["ts"], 1.0);

        assert_eq!(parsed[2]["ph"], "i");
        assert_eq!(parsed[2]["name"], "Rotate:move");
        assert_eq!(parsed[2]["args"]["radians"], 0.5);

        assert_eq!(parsed[3]["ph"], "E");
        assert_eq!(parsed[3]["name"], "Rotate");
        assert_eq!(parsed[3]["args"]["original_center"][1], 0.0);
    }

    #[test]
    fn end_without_begin_is_an_instant() {
        let mut rec = RecorderSink::new();
        rotate(&mut rec, 1, RotatePhase::End, 0.0);
        let parsed = exported(&rec);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["ph"], "i");
        assert_eq!(parsed[0]["name"], "Rotate:end");
    }

    #[test]
    fn skips_carry_reason() {
        let mut rec = RecorderSink::new();
        rec.on_skip(&SkipTrace {
            time: EventTime(4_000),
            action: ActionKind::PointerDown,
            reason: SkipReason::UnresolvedPointer,
        });
        let parsed = exported(&rec);
        assert_eq!(parsed[0]["name"], "Skip");
        assert_eq!(parsed[0]["args"]["reason"], "unresolved-pointer");
        assert_eq!(parsed[0]["args"]["action"], "pointer-down");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
