//! The codec contract and a handful of reference codecs.
//!
//! A codec is a type with associated functions only; iterators never hold a
//! codec value. Per-stream data lives in [`Codec::State`], which each iterator
//! owns by value.
//!
//! Capability is declared twice: by implementing the traits
//! ([`ReverseDecode`], [`FixedWidth`]) that unlock iterator operators, and by
//! [`Codec::POWER`], which must agree with them.

mod latin1;
mod utf16;
mod utf32;
mod utf8;
mod utf8_bom;

pub use latin1::Latin1;
pub use utf8::Utf8;
pub use utf8_bom::{BomState, Utf8Bom, WriteBom};
pub use utf16::Utf16;
pub use utf32::Utf32;

use crate::{
    EncodeError,
    capability::DecodePower,
    sink::UnitSink,
    storage::{ReversibleCursor, UnitCursor},
};

/// State carrier for codecs that need none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoState;

/// Outcome of one decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<C> {
    /// `None` when the consumed units did not form a character (malformed
    /// input, or a unit that only changes state).
    pub character: Option<C>,
    /// Code units consumed by the call.
    pub units: usize,
}

impl<C> Decoded<C> {
    #[must_use]
    pub const fn produced(character: C, units: usize) -> Self {
        Decoded {
            character: Some(character),
            units,
        }
    }

    #[must_use]
    pub const fn skipped(units: usize) -> Self {
        Decoded {
            character: None,
            units,
        }
    }
}

/// Forward decoding: the one capability every codec has.
pub trait Codec {
    type Unit: Copy;
    type Character: Copy;
    type State: Clone;

    /// Upper bound on code units per character; the exact width for
    /// [`FixedWidth`] codecs.
    const MAX_CODE_UNITS: usize;
    /// Must agree with the traits implemented: [`ReverseDecode`] requires
    /// `Reverse` or better and [`FixedWidth`] requires `FixedWidth`. Iterator
    /// steps that rely on those traits fail to compile on a mismatch.
    const POWER: DecodePower = DecodePower::Forward;

    /// Decode at most one character starting at `cursor`, leaving the cursor
    /// after every unit consumed.
    ///
    /// When `cursor` is not at `end` the call must consume at least one unit.
    fn decode<C>(state: &mut Self::State, cursor: &mut C, end: &C::Boundary) -> Decoded<Self::Character>
    where
        C: UnitCursor<Unit = Self::Unit>;
}

/// Decoding backward from a position toward the start of the storage.
///
/// Reverse decoding from the end of character *k* must consume exactly the
/// units forward decoding consumed for it.
pub trait ReverseDecode: Codec {
    fn decode_back<C>(state: &mut Self::State, cursor: &mut C, start: &C) -> Decoded<Self::Character>
    where
        C: ReversibleCursor<Unit = Self::Unit>;
}

/// Marker: every character occupies exactly `MAX_CODE_UNITS` units, so
/// character positions are plain arithmetic. Each full group of units must
/// produce a character; invalid groups decode to a replacement instead of
/// being skipped.
pub trait FixedWidth: ReverseDecode {}

/// Encoding one character.
pub trait Encode: Codec {
    /// Append the units for `character`, returning how many were written.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Unrepresentable`] when the encoding has no form for the
    /// character, or whatever the sink reports.
    fn encode<O>(state: &mut Self::State, out: &mut O, character: Self::Character) -> Result<usize, EncodeError>
    where
        O: UnitSink<Self::Unit> + ?Sized;
}

/// Encoding a state change that produces no character.
pub trait EncodeTransition: Encode {
    type Transition;

    /// # Errors
    ///
    /// Whatever the sink reports.
    fn encode_transition<O>(
        state: &mut Self::State,
        out: &mut O,
        transition: &Self::Transition,
    ) -> Result<usize, EncodeError>
    where
        O: UnitSink<Self::Unit> + ?Sized;
}
