// Copyright 2026 the Twirl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`]. Floats are stored as their IEEE-754
//! bit patterns, so decoding is exact.

use kurbo::Point;
use twirl_core::pointer::ActionKind;
use twirl_core::rotate::RotatePhase;
use twirl_core::time::EventTime;
use twirl_core::trace::{PointerEventTrace, RotateTrace, SkipReason, SkipTrace, TraceSink};

const TAG_POINTER_EVENT: u8 = 1;
const TAG_ROTATE: u8 = 2;
const TAG_SKIP: u8 = 3;

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_action(&mut self, a: ActionKind) {
        self.write_u8(match a {
            ActionKind::Down => 0,
            ActionKind::PointerDown => 1,
            ActionKind::Move => 2,
            ActionKind::Up => 3,
            ActionKind::PointerUp => 4,
            ActionKind::Cancel => 5,
            ActionKind::Other => 6,
        });
    }

    fn write_phase(&mut self, p: RotatePhase) {
        self.write_u8(match p {
            RotatePhase::Begin => 0,
            RotatePhase::Move => 1,
            RotatePhase::End => 2,
        });
    }

    fn write_reason(&mut self, r: SkipReason) {
        self.write_u8(match r {
            SkipReason::UnresolvedPointer => 0,
            SkipReason::MissingReference => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_pointer_event(&mut self, e: &PointerEventTrace) {
        self.write_u8(TAG_POINTER_EVENT);
        self.write_u64(e.time.nanos());
        self.write_action(e.action);
        self.write_u32(e.pointer_count);
    }

    fn on_rotate(&mut self, e: &RotateTrace) {
        self.write_u8(TAG_ROTATE);
        self.write_u64(e.time.nanos());
        self.write_phase(e.phase);
        self.write_f64(e.radians);
        self.write_point(e.center);
        self.write_point(e.original_center);
    }

    fn on_skip(&mut self, e: &SkipTrace) {
        self.write_u8(TAG_SKIP);
        self.write_u64(e.time.nanos());
        self.write_action(e.action);
        self.write_reason(e.reason);
    }
}

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`PointerEventTrace`].
    PointerEvent(PointerEventTrace),
    /// A [`RotateTrace`].
    Rotate(RotateTrace),
    /// A [`SkipTrace`].
    Skip(SkipTrace),
}

impl RecordedEvent {
    /// Timestamp of the recorded event.
    #[must_use]
    pub fn time(&self) -> EventTime {
        match self {
            Self::PointerEvent(e) => e.time,
            Self::Rotate(e) => e.time,
            Self::Skip(e) => e.time,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag, unknown enum value, or
/// truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_time(&mut self) -> Option<EventTime> {
        self.read_u64().map(EventTime)
    }

    fn read_point(&mut self) -> Option<Point> {
        Some(Point::new(self.read_f64()?, self.read_f64()?))
    }

    fn read_action(&mut self) -> Option<ActionKind> {
        Some(match self.read_u8()? {
            0 => ActionKind::Down,
            1 => ActionKind::PointerDown,
            2 => ActionKind::Move,
            3 => ActionKind::Up,
            4 => ActionKind::PointerUp,
            5 => ActionKind::Cancel,
            6 => ActionKind::Other,
            _ => return None,
        })
    }

    fn read_phase(&mut self) -> Option<RotatePhase> {
        Some(match self.read_u8()? {
            0 => RotatePhase::Begin,
            1 => RotatePhase::Move,
            2 => RotatePhase::End,
            _ => return None,
        })
    }

    fn read_reason(&mut self) -> Option<SkipReason> {
        Some(match self.read_u8()? {
            0 => SkipReason::UnresolvedPointer,
            1 => SkipReason::MissingReference,
            _ => return None,
        })
    }

    fn decode_pointer_event(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PointerEvent(PointerEventTrace {
            time: self.read_time()?,
            action: self.read_action()?,
            pointer_count: self.read_u32()?,
        }))
    }

    fn decode_rotate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Rotate(RotateTrace {
            time: self.read_time()?,
            phase: self.read_phase()?,
            radians: self.read_f64()?,
            center: self.read_point()?,
            original_center: self.read_point()?,
        }))
    }

    fn decode_skip(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Skip(SkipTrace {
            time: self.read_time()?,
            action: self.read_action()?,
            reason: self.read_reason()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_POINTER_EVENT => self.decode_pointer_event(),
            TAG_ROTATE => self.decode_rotate(),
            TAG_SKIP => self.decode_skip(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rotate() -> RotateTrace {
        RotateTrace {
            time: EventTime(2_000_000),
            phase: RotatePhase::Move,
            radians: -0.25,
            center: Point::new(12.5, -3.0),
            original_center: Point::new(10.0, 0.0),
        }
    }

    #[test]
    fn decodes_mixed_stream_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_pointer_event(&PointerEventTrace {
            time: EventTime(1_000_000),
            action: ActionKind::PointerDown,
            pointer_count: 2,
        });
        rec.on_rotate(&sample_rotate());
        rec.on_skip(&SkipTrace {
            time: EventTime(3_000_000),
            action: ActionKind::Move,
            reason: SkipReason::UnresolvedPointer,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 3);
        match &events[0] {
            RecordedEvent::PointerEvent(e) => {
                assert_eq!(e.action, ActionKind::PointerDown);
                assert_eq!(e.pointer_count, 2);
            }
            other => panic!("expected PointerEvent, got {other:?}"),
        }
        assert_eq!(events[1], RecordedEvent::Rotate(sample_rotate()));
        match &events[2] {
            RecordedEvent::Skip(e) => {
                assert_eq!(e.reason, SkipReason::UnresolvedPointer);
                assert_eq!(e.time, EventTime(3_000_000));
            }
            other => panic!("expected Skip, got {other:?}"),
        }
        assert_eq!(events[2].time(), EventTime(3_000_000));
    }

    #[test]
    fn float_bits_survive_exactly() {
        let mut rec = RecorderSink::new();
        let mut e = sample_rotate();
        e.radians = core::f64::consts::PI * 1.5;
        rec.on_rotate(&e);
        let Some(RecordedEvent::Rotate(d)) = decode(rec.as_bytes()).next() else {
            panic!("expected a rotate record");
        };
        assert_eq!(d.radians.to_bits(), e.radians.to_bits());
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        assert_eq!(decode(&[]).count(), 0);
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_rotate(&sample_rotate());
        rec.on_rotate(&sample_rotate());
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(decode(cut).count(), 1);
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_skip(&SkipTrace {
            time: EventTime(1),
            action: ActionKind::Move,
            reason: SkipReason::MissingReference,
        });
        let mut bytes = rec.into_bytes();
        bytes.push(0xff);
        bytes.extend_from_slice(&[0; 16]);
        assert_eq!(decode(&bytes).count(), 1);
    }
}
