//! Cursor and storage contracts.
//!
//! A decoding iterator never reads code units itself. It copies, compares and
//! offsets cursors, and hands them to the codec, which reads through
//! [`UnitCursor::next_unit`] and friends. The cursor traits form a ladder:
//!
//! - [`UnitCursor`]: single pass, read forward until the boundary.
//! - [`MultiPassCursor`]: copies are independent and comparable.
//! - [`ReversibleCursor`]: can step backward toward the storage start.
//! - [`OffsetCursor`]: can jump by an integer distance in O(1).

#[cfg(any(test, feature = "fuzzing"))]
mod restricted;
mod slice;
mod stream;

#[cfg(any(test, feature = "fuzzing"))]
pub use restricted::{BidiCursor, BidiOnly, ForwardCursor, ForwardOnly};
pub use slice::SliceCursor;
pub use stream::{StreamCursor, StreamEnd, UnitStream};

use crate::capability::Traversal;

mod sealed {
    pub trait Sealed {}
}

/// A position over code units.
pub trait UnitCursor: Sized {
    type Unit: Copy;
    /// The end marker of the storage this cursor walks. Multi-pass storages
    /// use the cursor type itself.
    type Boundary;
    /// How a decoding iterator remembers the character it is positioned on.
    type Span: Span<Self>;

    const TRAVERSAL: Traversal;

    fn is_at(&self, end: &Self::Boundary) -> bool;

    /// The unit under the cursor, without consuming it.
    fn peek_unit(&self, end: &Self::Boundary) -> Option<Self::Unit>;

    /// Read the unit under the cursor and step past it. Returns `None` at the
    /// boundary, leaving the cursor in place.
    fn next_unit(&mut self, end: &Self::Boundary) -> Option<Self::Unit>;
}

/// A cursor whose copies are independent and comparable.
pub trait MultiPassCursor: UnitCursor<Span = UnitRange<Self>> + Clone + PartialEq {}

/// A multi-pass cursor that can walk backward.
pub trait ReversibleCursor: MultiPassCursor {
    /// Step back one unit and read it. Returns `None` when already at `start`.
    fn prev_unit(&mut self, start: &Self) -> Option<Self::Unit>;

    fn peek_prev_unit(&self, start: &Self) -> Option<Self::Unit> {
        self.clone().prev_unit(start)
    }
}

/// A reversible cursor that moves by any distance in constant time.
pub trait OffsetCursor: ReversibleCursor {
    /// Move by `n` code units. Positions outside the storage saturate at its
    /// start or end.
    fn jump(&mut self, n: isize);

    /// Signed number of code units from `origin` to `self`.
    fn units_from(&self, origin: &Self) -> isize;
}

/// A collection of code units that decoding iterators borrow.
pub trait CodeUnits {
    type Unit: Copy;
    type Cursor<'a>: UnitCursor<Unit = Self::Unit>
    where
        Self: 'a;

    /// A cursor at the first code unit.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// The end boundary.
    fn boundary(&self) -> BoundaryOf<'_, Self>;
}

pub type CursorOf<'a, S: ?Sized> = <S as CodeUnits>::Cursor<'a>;
pub type BoundaryOf<'a, S: ?Sized> = <CursorOf<'a, S> as UnitCursor>::Boundary;
pub type SpanOf<'a, S: ?Sized> = <CursorOf<'a, S> as UnitCursor>::Span;

/// Position bookkeeping inside a decoding iterator. Implemented only by
/// [`Pass`] and [`UnitRange`].
pub trait Span<C: UnitCursor>: sealed::Sealed {
    #[doc(hidden)]
    fn starting_at(cursor: C) -> Self;

    /// The cursor that identifies the current character.
    fn base(&self) -> &C;

    /// Whether no character is held and nothing remains before `end`.
    fn is_at(&self, end: &C::Boundary) -> bool;

    /// Run `decode_one` against the remaining units until it reports a
    /// character or the boundary is reached.
    #[doc(hidden)]
    fn step_forward<F>(&mut self, end: &C::Boundary, decode_one: F)
    where
        F: FnMut(&mut C) -> bool;
}

/// Single-pass bookkeeping: the live cursor, already past the current
/// character, and whether that character is still pending.
#[derive(Debug, Clone)]
pub struct Pass<C> {
    cursor: C,
    pending: bool,
}

impl<C> sealed::Sealed for Pass<C> {}

impl<C: UnitCursor> Span<C> for Pass<C> {
    fn starting_at(cursor: C) -> Self {
        Pass {
            cursor,
            pending: false,
        }
    }

    fn base(&self) -> &C {
        &self.cursor
    }

    fn is_at(&self, end: &C::Boundary) -> bool {
        !self.pending && self.cursor.is_at(end)
    }

    fn step_forward<F>(&mut self, end: &C::Boundary, mut decode_one: F)
    where
        F: FnMut(&mut C) -> bool,
    {
        self.pending = false;
        while !self.cursor.is_at(end) {
            if decode_one(&mut self.cursor) {
                self.pending = true;
                return;
            }
        }
    }
}

/// The half-open run of code units `[first, last)` that produced the current
/// character.
///
/// `first == last` only before the first step or once the iterator is past
/// the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRange<C> {
    pub(crate) first: C,
    pub(crate) last: C,
}

impl<C> sealed::Sealed for UnitRange<C> {}

impl<C> UnitRange<C> {
    pub fn begin(&self) -> &C {
        &self.first
    }

    pub fn end(&self) -> &C {
        &self.last
    }
}

impl<'a, T> UnitRange<SliceCursor<'a, T>> {
    /// The consumed code units.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.first.slice_to(&self.last)
    }
}

impl<C: UnitCursor + Clone> Span<C> for UnitRange<C> {
    fn starting_at(cursor: C) -> Self {
        UnitRange {
            first: cursor.clone(),
            last: cursor,
        }
    }

    fn base(&self) -> &C {
        &self.first
    }

    fn is_at(&self, end: &C::Boundary) -> bool {
        self.first.is_at(end)
    }

    fn step_forward<F>(&mut self, end: &C::Boundary, mut decode_one: F)
    where
        F: FnMut(&mut C) -> bool,
    {
        self.first = self.last.clone();
        while !self.last.is_at(end) {
            if decode_one(&mut self.last) {
                return;
            }
            self.first = self.last.clone();
        }
    }
}
