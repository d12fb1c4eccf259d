use super::{Codec, Decoded, Encode, FixedWidth, NoState, ReverseDecode};
use crate::{
    EncodeError,
    capability::DecodePower,
    sink::UnitSink,
    storage::{ReversibleCursor, UnitCursor},
};

/// ISO-8859-1: one byte per character, U+0000 through U+00FF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl Codec for Latin1 {
    type Unit = u8;
    type Character = char;
    type State = NoState;

    const MAX_CODE_UNITS: usize = 1;
    const POWER: DecodePower = DecodePower::FixedWidth;

    fn decode<C>(_state: &mut NoState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u8>,
    {
        match cursor.next_unit(end) {
            Some(unit) => Decoded::produced(char::from(unit), 1),
            None => Decoded::skipped(0),
        }
    }
}

impl ReverseDecode for Latin1 {
    fn decode_back<C>(_state: &mut NoState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u8>,
    {
        match cursor.prev_unit(start) {
            Some(unit) => Decoded::produced(char::from(unit), 1),
            None => Decoded::skipped(0),
        }
    }
}

impl FixedWidth for Latin1 {}

impl Encode for Latin1 {
    fn encode<O>(_state: &mut NoState, out: &mut O, character: char) -> Result<usize, EncodeError>
    where
        O: UnitSink<u8> + ?Sized,
    {
        let unit = u8::try_from(character).map_err(|_| EncodeError::Unrepresentable)?;
        out.push_unit(unit)?;
        Ok(1)
    }
}
