use core::ops::RangeInclusive;

use super::{Codec, Decoded, Encode, NoState, ReverseDecode};
use crate::{
    EncodeError,
    capability::DecodePower,
    sink::UnitSink,
    storage::{CodeUnits, ReversibleCursor, UnitCursor},
};

/// UTF-8 over `u8` code units.
///
/// Ill-formed sequences are skipped using the maximal-subpart rule: a decode
/// stops at the first unit that cannot continue the sequence and reports the
/// units before it as consumed without a character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

#[inline]
fn is_continuation(unit: u8) -> bool {
    unit & 0xC0 == 0x80
}

/// Width and payload bits of a lead byte, `None` for bytes that never start a
/// sequence.
#[inline]
fn lead(unit: u8) -> Option<(usize, u32)> {
    match unit {
        0x00..=0x7F => Some((1, u32::from(unit))),
        0xC2..=0xDF => Some((2, u32::from(unit & 0x1F))),
        0xE0..=0xEF => Some((3, u32::from(unit & 0x0F))),
        0xF0..=0xF4 => Some((4, u32::from(unit & 0x07))),
        _ => None,
    }
}

/// Valid second bytes; excludes overlong forms, surrogates and values past
/// U+10FFFF.
#[inline]
fn second_unit_range(lead: u8) -> RangeInclusive<u8> {
    match lead {
        0xE0 => 0xA0..=0xBF,
        0xED => 0x80..=0x9F,
        0xF0 => 0x90..=0xBF,
        0xF4 => 0x80..=0x8F,
        _ => 0x80..=0xBF,
    }
}

impl Codec for Utf8 {
    type Unit = u8;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = 4;
    const POWER: DecodePower = DecodePower::Reverse;

    fn decode<C>(_state: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u8>,
    {
        let Some(first) = cursor.next_unit(end) else {
            return Decoded::skipped(0);
        };
        let Some((width, mut scalar)) = lead(first) else {
            return Decoded::skipped(1);
        };

        let mut units = 1;
        while units < width {
            let accepted = match cursor.peek_unit(end) {
                Some(unit) if units == 1 => second_unit_range(first).contains(&unit),
                Some(unit) => is_continuation(unit),
                None => false,
            };
            if !accepted {
                return Decoded::skipped(units);
            }
            if let Some(unit) = cursor.next_unit(end) {
                scalar = (scalar << 6) | u32::from(unit & 0x3F);
            }
            units += 1;
        }

        match char::from_u32(scalar) {
            Some(c) => Decoded::produced(c, units),
            None => Decoded::skipped(units),
        }
    }
}

impl ReverseDecode for Utf8 {
    fn decode_back<C>(state: &mut NoState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u8>,
    {
        let origin = cursor.clone();
        let Some(last) = cursor.prev_unit(start) else {
            return Decoded::skipped(0);
        };
        if last < 0x80 {
            return Decoded::produced(char::from(last), 1);
        }

        let mut buf = [0u8; 4];
        buf[3] = last;
        let mut units = 1;
        if is_continuation(last) {
            while units < buf.len() {
                let Some(unit) = cursor.prev_unit(start) else {
                    break;
                };
                units += 1;
                buf[buf.len() - units] = unit;
                if !is_continuation(unit) {
                    break;
                }
            }
        }

        // Re-decode forward; the candidate only counts if it is exactly one
        // well-formed character.
        let candidate = &buf[buf.len() - units..];
        let mut forward = candidate.cursor();
        let decoded = Self::decode(state, &mut forward, &candidate.boundary());
        if let (Some(c), true) = (decoded.character, decoded.units == units) {
            return Decoded::produced(c, units);
        }

        *cursor = origin;
        cursor.prev_unit(start);
        Decoded::skipped(1)
    }
}

impl Encode for Utf8 {
    fn encode<O>(_state: &mut NoState, out: &mut O, character: char) -> Result<usize, EncodeError>
    where
        O: UnitSink<u8> + ?Sized,
    {
        let mut buf = [0u8; 4];
        let encoded = character.encode_utf8(&mut buf);
        out.extend_units(encoded.as_bytes())?;
        Ok(encoded.len())
    }
}
