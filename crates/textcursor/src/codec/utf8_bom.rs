use super::{Codec, Decoded, Encode, EncodeTransition, NoState, ReverseDecode, Utf8};
use crate::{
    EncodeError,
    capability::DecodePower,
    sink::UnitSink,
    storage::{ReversibleCursor, UnitCursor},
};

const BOM: char = '\u{FEFF}';

/// UTF-8 with a byte order mark.
///
/// Decoding drops a BOM at the very start of the text: on the first forward
/// decode of a fresh state, or when decoding backward onto the storage start.
/// Encoding writes one before the first character unless [`WriteBom`] already
/// did.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Bom;

/// Whether the start of the text has been dealt with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BomState {
    started: bool,
}

impl BomState {
    #[must_use]
    pub fn started(self) -> bool {
        self.started
    }
}

/// Transition token: emit the BOM now if it has not been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteBom;

impl Codec for Utf8Bom {
    type Unit = u8;
    type Character = char;
    type State = BomState;

    const MAX_CODE_UNITS: usize = 4;
    const POWER: DecodePower = DecodePower::Reverse;

    fn decode<C>(state: &mut BomState, cursor: &mut C, end: &C::Boundary) -> Decoded<char>
    where
        C: UnitCursor<Unit = u8>,
    {
        let decoded = Utf8::decode(&mut NoState, cursor, end);
        if core::mem::replace(&mut state.started, true) || decoded.character != Some(BOM) {
            return decoded;
        }
        Decoded::skipped(decoded.units)
    }
}

impl ReverseDecode for Utf8Bom {
    /// Walking backward means the start is already behind any forward decode
    /// that follows, so this marks the state started.
    fn decode_back<C>(state: &mut BomState, cursor: &mut C, start: &C) -> Decoded<char>
    where
        C: ReversibleCursor<Unit = u8>,
    {
        state.started = true;
        let decoded = Utf8::decode_back(&mut NoState, cursor, start);
        if decoded.character == Some(BOM) && *cursor == *start {
            return Decoded::skipped(decoded.units);
        }
        decoded
    }
}

impl Encode for Utf8Bom {
    fn encode<O>(state: &mut BomState, out: &mut O, character: char) -> Result<usize, EncodeError>
    where
        O: UnitSink<u8> + ?Sized,
    {
        let bom = Self::encode_transition(state, out, &WriteBom)?;
        Ok(bom + Utf8::encode(&mut NoState, out, character)?)
    }
}

impl EncodeTransition for Utf8Bom {
    type Transition = WriteBom;

    fn encode_transition<O>(state: &mut BomState, out: &mut O, _transition: &WriteBom) -> Result<usize, EncodeError>
    where
        O: UnitSink<u8> + ?Sized,
    {
        if state.started {
            return Ok(0);
        }
        let written = Utf8::encode(&mut NoState, out, BOM)?;
        state.started = true;
        Ok(written)
    }
}
