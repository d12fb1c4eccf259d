use core::cmp::Ordering;

use bstr::BStr;

use super::{CodeUnits, MultiPassCursor, OffsetCursor, ReversibleCursor, UnitCursor, UnitRange};
use crate::capability::Traversal;

/// An index into a borrowed slice of code units.
///
/// Two cursors compare by index only; comparing cursors over different slices
/// is meaningless but not unsafe.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    units: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    #[must_use]
    pub fn new(units: &'a [T], pos: usize) -> Self {
        SliceCursor {
            units,
            pos: pos.min(units.len()),
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn slice_to(&self, last: &Self) -> &'a [T] {
        &self.units[self.pos..last.pos.max(self.pos)]
    }
}

// Derives would require `T: Clone`/`T: PartialEq`.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SliceCursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<T: Copy> UnitCursor for SliceCursor<'_, T> {
    type Unit = T;
    type Boundary = Self;
    type Span = UnitRange<Self>;

    const TRAVERSAL: Traversal = Traversal::Offsettable;

    #[inline]
    fn is_at(&self, end: &Self) -> bool {
        self.pos == end.pos
    }

    #[inline]
    fn peek_unit(&self, end: &Self) -> Option<T> {
        if self.is_at(end) {
            return None;
        }
        self.units.get(self.pos).copied()
    }

    #[inline]
    fn next_unit(&mut self, end: &Self) -> Option<T> {
        let unit = self.peek_unit(end)?;
        self.pos += 1;
        Some(unit)
    }
}

impl<T: Copy> MultiPassCursor for SliceCursor<'_, T> {}

impl<T: Copy> ReversibleCursor for SliceCursor<'_, T> {
    #[inline]
    fn prev_unit(&mut self, start: &Self) -> Option<T> {
        if self.pos <= start.pos {
            return None;
        }
        self.pos -= 1;
        self.units.get(self.pos).copied()
    }
}

impl<T: Copy> OffsetCursor for SliceCursor<'_, T> {
    fn jump(&mut self, n: isize) {
        self.pos = self
            .pos
            .saturating_add_signed(n)
            .min(self.units.len());
    }

    #[expect(clippy::cast_possible_wrap)]
    fn units_from(&self, origin: &Self) -> isize {
        // Slice lengths never exceed `isize::MAX`.
        if self.pos >= origin.pos {
            (self.pos - origin.pos) as isize
        } else {
            -((origin.pos - self.pos) as isize)
        }
    }
}

impl<T: Copy> CodeUnits for [T] {
    type Unit = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self, 0)
    }

    fn boundary(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self, self.len())
    }
}

impl<T: Copy, const N: usize> CodeUnits for [T; N] {
    type Unit = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, T> {
        self.as_slice().cursor()
    }

    fn boundary(&self) -> SliceCursor<'_, T> {
        self.as_slice().boundary()
    }
}

#[cfg(feature = "alloc")]
impl<T: Copy> CodeUnits for alloc::vec::Vec<T> {
    type Unit = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, T> {
        self.as_slice().cursor()
    }

    fn boundary(&self) -> SliceCursor<'_, T> {
        self.as_slice().boundary()
    }
}

impl CodeUnits for str {
    type Unit = u8;
    type Cursor<'a> = SliceCursor<'a, u8>;

    fn cursor(&self) -> SliceCursor<'_, u8> {
        self.as_bytes().cursor()
    }

    fn boundary(&self) -> SliceCursor<'_, u8> {
        self.as_bytes().boundary()
    }
}

impl CodeUnits for BStr {
    type Unit = u8;
    type Cursor<'a> = SliceCursor<'a, u8>;

    fn cursor(&self) -> SliceCursor<'_, u8> {
        <[u8]>::cursor(self)
    }

    fn boundary(&self) -> SliceCursor<'_, u8> {
        <[u8]>::boundary(self)
    }
}

#[cfg(feature = "alloc")]
impl CodeUnits for bstr::BString {
    type Unit = u8;
    type Cursor<'a> = SliceCursor<'a, u8>;

    fn cursor(&self) -> SliceCursor<'_, u8> {
        self.as_slice().cursor()
    }

    fn boundary(&self) -> SliceCursor<'_, u8> {
        self.as_slice().boundary()
    }
}
