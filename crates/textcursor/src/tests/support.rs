//! Codecs with unusual capabilities or behavior.

use crate::{
    capability::DecodePower,
    codec::{Codec, Decoded, FixedWidth, NoState, ReverseDecode, Utf8},
    storage::{ReversibleCursor, UnitCursor},
};

/// UTF-8 with reverse decoding withheld.
pub(crate) enum Utf8Forward {}

impl Codec for Utf8Forward {
    type Unit = u8;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = Utf8::MAX_CODE_UNITS;

    fn decode<C>(state: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u8>,
    {
        Utf8::decode(state, cursor, end)
    }
}

/// Produces `'!'` for every `!` byte and consumes nothing anywhere else.
pub(crate) enum Stall {}

impl Codec for Stall {
    type Unit = u8;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = 1;
    const POWER: DecodePower = DecodePower::Reverse;

    fn decode<C>(_: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u8>,
    {
        match cursor.peek_unit(end) {
            Some(b'!') => {
                cursor.next_unit(end);
                Decoded::produced('!', 1)
            }
            _ => Decoded::skipped(0),
        }
    }
}

impl ReverseDecode for Stall {
    fn decode_back<C>(_: &mut NoState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u8>,
    {
        match cursor.peek_prev_unit(start) {
            Some(b'!') => {
                cursor.prev_unit(start);
                Decoded::produced('!', 1)
            }
            _ => Decoded::skipped(0),
        }
    }
}

/// UCS-2 as big-endian byte pairs: two units per character, surrogates and
/// a dangling final byte decode to U+FFFD.
pub(crate) enum Ucs2Be {}

fn ucs2(high: u8, low: Option<u8>) -> Decoded<char> {
    match low {
        Some(low) => {
            let c = char::from_u32(u32::from(u16::from_be_bytes([high, low])));
            Decoded::produced(c.unwrap_or(char::REPLACEMENT_CHARACTER), 2)
        }
        None => Decoded::produced(char::REPLACEMENT_CHARACTER, 1),
    }
}

impl Codec for Ucs2Be {
    type Unit = u8;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = 2;
    const POWER: DecodePower = DecodePower::FixedWidth;

    fn decode<C>(_: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u8>,
    {
        match cursor.next_unit(end) {
            Some(high) => ucs2(high, cursor.next_unit(end)),
            None => Decoded::skipped(0),
        }
    }
}

impl ReverseDecode for Ucs2Be {
    fn decode_back<C>(_: &mut NoState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u8>,
    {
        let Some(low) = cursor.prev_unit(start) else {
            return Decoded::skipped(0);
        };
        match cursor.prev_unit(start) {
            Some(high) => ucs2(high, Some(low)),
            None => ucs2(low, None),
        }
    }
}

impl FixedWidth for Ucs2Be {}

pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
