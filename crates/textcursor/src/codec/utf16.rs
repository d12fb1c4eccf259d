use super::{Codec, Decoded, Encode, NoState, ReverseDecode};
use crate::{
    EncodeError,
    capability::DecodePower,
    sink::UnitSink,
    storage::{ReversibleCursor, UnitCursor},
};

/// UTF-16 over `u16` code units in native order. Unpaired surrogates are
/// skipped one unit at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

#[inline]
fn is_high(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
fn is_low(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

fn combine(high: u16, low: u16) -> Decoded<char> {
    let scalar = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    match char::from_u32(scalar) {
        Some(c) => Decoded::produced(c, 2),
        None => Decoded::skipped(2),
    }
}

fn single(unit: u16) -> Decoded<char> {
    match char::from_u32(u32::from(unit)) {
        Some(c) => Decoded::produced(c, 1),
        None => Decoded::skipped(1),
    }
}

impl Codec for Utf16 {
    type Unit = u16;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = 2;
    const POWER: DecodePower = DecodePower::Reverse;

    fn decode<C>(_state: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u16>,
    {
        let Some(unit) = cursor.next_unit(end) else {
            return Decoded::skipped(0);
        };
        if !is_high(unit) {
            return single(unit);
        }
        match cursor.peek_unit(end) {
            Some(low) if is_low(low) => {
                cursor.next_unit(end);
                combine(unit, low)
            }
            _ => Decoded::skipped(1),
        }
    }
}

impl ReverseDecode for Utf16 {
    fn decode_back<C>(_state: &mut NoState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u16>,
    {
        let Some(unit) = cursor.prev_unit(start) else {
            return Decoded::skipped(0);
        };
        if !is_low(unit) {
            return single(unit);
        }
        match cursor.peek_prev_unit(start) {
            Some(high) if is_high(high) => {
                cursor.prev_unit(start);
                combine(high, unit)
            }
            _ => Decoded::skipped(1),
        }
    }
}

impl Encode for Utf16 {
    fn encode<O>(_state: &mut NoState, out: &mut O, character: char) -> Result<usize, EncodeError>
    where
        O: UnitSink<u16> + ?Sized,
    {
        let mut buf = [0u16; 2];
        let encoded = character.encode_utf16(&mut buf);
        out.extend_units(encoded)?;
        Ok(encoded.len())
    }
}
