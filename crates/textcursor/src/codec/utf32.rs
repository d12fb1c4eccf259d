use super::{Codec, Decoded, Encode, FixedWidth, NoState, ReverseDecode};
use crate::{
    EncodeError,
    capability::DecodePower,
    sink::UnitSink,
    storage::{ReversibleCursor, UnitCursor},
};

/// UTF-32 over `u32` code units. Units that are not Unicode scalar values
/// decode to U+FFFD, so every unit is one character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf32;

impl Codec for Utf32 {
    type Unit = u32;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = 1;
    const POWER: DecodePower = DecodePower::FixedWidth;

    fn decode<C>(_state: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u32>,
    {
        match cursor.next_unit(end) {
            Some(unit) => scalar(unit),
            None => Decoded::skipped(0),
        }
    }
}

impl ReverseDecode for Utf32 {
    fn decode_back<C>(_state: &mut NoState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u32>,
    {
        match cursor.prev_unit(start) {
            Some(unit) => scalar(unit),
            None => Decoded::skipped(0),
        }
    }
}

impl FixedWidth for Utf32 {}

fn scalar(unit: u32) -> Decoded<char> {
    match char::from_u32(unit) {
        Some(c) => Decoded::produced(c, 1),
        None => Decoded::produced(char::REPLACEMENT_CHARACTER, 1),
    }
}

impl Encode for Utf32 {
    fn encode<O>(_state: &mut NoState, out: &mut O, character: char) -> Result<usize, EncodeError>
    where
        O: UnitSink<u32> + ?Sized,
    {
        out.push_unit(u32::from(character))?;
        Ok(1)
    }
}
