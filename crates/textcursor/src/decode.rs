//! The decoding iterator.
//!
//! A [`TextIter`] is always positioned on a character: construction performs
//! the first step, and every step leaves it either on the next decodable
//! character or at the end. Which steps exist depends on the cursor and codec;
//! see [`crate::capability`].

use core::{fmt, iter::FusedIterator, marker::PhantomData};

use crate::{
    capability::{Capabilities, DecodePower, Tier},
    codec::{Codec, FixedWidth, ReverseDecode},
    storage::{
        BoundaryOf, CodeUnits, CursorOf, MultiPassCursor, OffsetCursor, ReversibleCursor, Span, SpanOf,
        UnitCursor, UnitRange,
    },
};

/// Iterates the characters `E` decodes from the code units in `S`.
///
/// Backward steps need a reversible cursor and a reverse-decoding codec:
///
/// ```compile_fail
/// use textcursor::{TextIter, codec::Utf8, storage::UnitStream};
///
/// let stream = UnitStream::new("ab".bytes());
/// let mut iter = TextIter::<Utf8, _>::begin(&stream);
/// iter.retreat();
/// ```
///
/// and jumps need a fixed-width codec on top of an offsettable cursor:
///
/// ```compile_fail
/// use textcursor::{TextIter, codec::Utf8};
///
/// let mut iter = TextIter::<Utf8, str>::begin("ab");
/// iter.offset(1);
/// ```
///
/// A codec's [`Codec::POWER`] must agree with the traits it implements;
/// stepping back with a codec that still declares forward-only decoding is
/// rejected when the step is instantiated:
///
/// ```compile_fail
/// use textcursor::{
///     TextIter,
///     codec::{Codec, Decoded, NoState, ReverseDecode, Utf8},
///     storage::{ReversibleCursor, UnitCursor},
/// };
///
/// enum Undeclared {}
///
/// impl Codec for Undeclared {
///     type Unit = u8;
///     type Character = char;
///     type State = NoState;
///     const MAX_CODE_UNITS: usize = 4;
///
///     fn decode<C: UnitCursor<Unit = u8>>(s: &mut NoState, c: &mut C, end: &C::Boundary) -> Decoded<char> {
///         Utf8::decode(s, c, end)
///     }
/// }
///
/// impl ReverseDecode for Undeclared {
///     fn decode_back<C: ReversibleCursor<Unit = u8>>(s: &mut NoState, c: &mut C, start: &C) -> Decoded<char> {
///         Utf8::decode_back(s, c, start)
///     }
/// }
///
/// let mut iter = TextIter::<Undeclared, str>::end("ab");
/// iter.retreat();
/// ```
pub struct TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
{
    state: E::State,
    storage: &'a S,
    span: SpanOf<'a, S>,
    value: Option<E::Character>,
    codec: PhantomData<fn() -> E>,
}

impl<'a, E, S> TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
{
    pub const CAPABILITIES: Capabilities =
        Capabilities::of(<CursorOf<'a, S> as UnitCursor>::TRAVERSAL, E::POWER);
    pub const TIER: Tier = Self::CAPABILITIES.tier;

    /// Start decoding at `start` with `state`, landing on the first character
    /// at or after it.
    pub fn new(state: E::State, storage: &'a S, start: CursorOf<'a, S>) -> Self {
        let mut iter = TextIter {
            state,
            storage,
            span: <SpanOf<'a, S> as Span<_>>::starting_at(start),
            value: None,
            codec: PhantomData,
        };
        iter.advance();
        iter
    }

    pub fn with_state(state: E::State, storage: &'a S) -> Self {
        Self::new(state, storage, storage.cursor())
    }

    pub fn begin(storage: &'a S) -> Self
    where
        E::State: Default,
    {
        Self::with_state(E::State::default(), storage)
    }

    /// The most recently decoded character. `None` only if nothing has been
    /// decoded yet, i.e. the text had no characters.
    #[must_use]
    pub fn get(&self) -> Option<E::Character> {
        self.value
    }

    /// The cursor identifying the current position: the start of the current
    /// character for multi-pass cursors, the live read position otherwise.
    pub fn base(&self) -> &CursorOf<'a, S> {
        self.span.base()
    }

    pub fn state(&self) -> &E::State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut E::State {
        &mut self.state
    }

    pub fn tier(&self) -> Tier {
        Self::TIER
    }

    pub fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
    }

    pub fn storage(&self) -> &'a S {
        self.storage
    }

    /// Whether the iterator has stepped past the last character.
    pub fn is_end(&self) -> bool {
        self.span.is_at(&self.storage.boundary())
    }

    pub(crate) fn is_at(&self, boundary: &BoundaryOf<'a, S>) -> bool {
        self.span.is_at(boundary)
    }

    /// Step to the next character.
    ///
    /// Units the codec consumes without producing a character are stepped
    /// over; a codec that consumes nothing is forced past one unit, so this
    /// terminates after at most as many decode calls as there are units left.
    pub fn advance(&mut self) -> &mut Self {
        let storage: &'a S = self.storage;
        let end = storage.boundary();
        let state = &mut self.state;
        let value = &mut self.value;
        self.span.step_forward(&end, |cursor| {
            let decoded = E::decode(state, cursor, &end);
            if let Some(character) = decoded.character {
                *value = Some(character);
                return true;
            }
            if decoded.units == 0 {
                cursor.next_unit(&end);
            }
            trace_event!(units = decoded.units, "skipped code units without a character");
            false
        });
        self
    }
}

impl<'a, E, S> TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: MultiPassCursor,
{
    /// An iterator positioned at the end of `storage`.
    pub fn end(storage: &'a S) -> Self
    where
        E::State: Default,
        CursorOf<'a, S>: UnitCursor<Boundary = CursorOf<'a, S>>,
    {
        Self::new(E::State::default(), storage, storage.boundary())
    }

    /// The code units that produced the current character.
    pub fn base_range(&self) -> &UnitRange<CursorOf<'a, S>> {
        &self.span
    }
}

impl<'a, E, S> TextIter<'a, E, S>
where
    E: ReverseDecode,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: ReversibleCursor,
{
    /// Step to the previous character.
    ///
    /// Units the codec steps back over without producing a character are
    /// skipped. If no character precedes the current one, nothing changes.
    pub fn retreat(&mut self) -> &mut Self {
        const {
            assert!(
                matches!(E::POWER, DecodePower::Reverse | DecodePower::FixedWidth),
                "codec implements ReverseDecode but its POWER is Forward"
            );
        }
        let start = self.storage.cursor();
        let mut first = self.span.first.clone();
        while first != start {
            let last = first.clone();
            let decoded = E::decode_back(&mut self.state, &mut first, &start);
            if let Some(character) = decoded.character {
                self.span = UnitRange { first, last };
                self.value = Some(character);
                break;
            }
            if decoded.units == 0 {
                first.prev_unit(&start);
            }
            trace_event!(units = decoded.units, "skipped code units without a character");
        }
        self
    }
}

impl<'a, E, S> TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    #[expect(clippy::cast_possible_wrap)]
    const WIDTH: isize = {
        assert!(
            matches!(E::POWER, DecodePower::FixedWidth),
            "codec implements FixedWidth but its POWER is not FixedWidth"
        );
        assert!(E::MAX_CODE_UNITS > 0, "fixed-width codec with zero-unit characters");
        E::MAX_CODE_UNITS as isize
    };

    /// Move by `n` characters with one jump and a single decode step.
    ///
    /// Moving before the first character stops on it; moving past the last
    /// stops at the end. Counts too large to express in units saturate.
    pub fn offset(&mut self, n: isize) -> &mut Self {
        match n.cmp(&0) {
            core::cmp::Ordering::Less => {
                self.span.first.jump((n + 1).saturating_mul(Self::WIDTH));
                if self.span.first == self.storage.cursor() {
                    self.span.last = self.span.first.clone();
                    self.advance();
                } else {
                    self.retreat();
                }
            }
            core::cmp::Ordering::Greater => {
                self.span.last.jump((n - 1).saturating_mul(Self::WIDTH));
                self.advance();
            }
            core::cmp::Ordering::Equal => {}
        }
        self
    }

    /// Signed number of characters from `origin` to `self`. Computed from the
    /// unit distance alone, without decoding.
    pub fn distance_from(&self, origin: &Self) -> isize {
        self.span.first.units_from(&origin.span.first) / Self::WIDTH
    }

    /// The character `n` positions away, or `None` if that is past the end.
    #[must_use]
    pub fn at(&self, n: isize) -> Option<E::Character> {
        let mut iter = self.clone();
        iter.offset(n);
        if iter.is_end() { None } else { iter.get() }
    }
}

impl<'a, E, S> Clone for TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    SpanOf<'a, S>: Clone,
{
    fn clone(&self) -> Self {
        TextIter {
            state: self.state.clone(),
            storage: self.storage,
            span: self.span.clone(),
            value: self.value,
            codec: PhantomData,
        }
    }
}

impl<'a, E, S> fmt::Debug for TextIter<'a, E, S>
where
    E: Codec,
    E::State: fmt::Debug,
    E::Character: fmt::Debug,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    SpanOf<'a, S>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextIter")
            .field("state", &self.state)
            .field("span", &self.span)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<'a, E, S> Iterator for TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
{
    type Item = E::Character;

    /// Yield the current character and step past it.
    fn next(&mut self) -> Option<E::Character> {
        if self.is_end() {
            return None;
        }
        let current = self.value;
        self.advance();
        current
    }
}

impl<'a, E, S> FusedIterator for TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: MultiPassCursor,
{
}
