//! Comparison and arithmetic operators for [`TextIter`] and [`TextSentinel`].
//!
//! Iterators compare by the start of their current character; the decoded
//! value and the codec state play no part. Ordering and arithmetic exist only
//! for random-access pairings.

use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{
    TextIter, TextSentinel,
    codec::{Codec, FixedWidth},
    storage::{BoundaryOf, CodeUnits, CursorOf, MultiPassCursor, OffsetCursor},
};

impl<'a, E, S> PartialEq for TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: MultiPassCursor,
{
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl<'a, E, S> PartialOrd for TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.distance_from(other).cmp(&0))
    }
}

impl<'a, E, S> PartialEq<TextSentinel<BoundaryOf<'a, S>>> for TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
{
    fn eq(&self, sentinel: &TextSentinel<BoundaryOf<'a, S>>) -> bool {
        self.is_at(sentinel.base())
    }
}

impl<'a, E, S> PartialEq<TextIter<'a, E, S>> for TextSentinel<BoundaryOf<'a, S>>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
{
    fn eq(&self, iter: &TextIter<'a, E, S>) -> bool {
        iter.is_at(self.base())
    }
}

impl<'a, E, S> PartialOrd<TextSentinel<BoundaryOf<'a, S>>> for TextIter<'a, E, S>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: MultiPassCursor + PartialOrd<BoundaryOf<'a, S>>,
{
    fn partial_cmp(&self, sentinel: &TextSentinel<BoundaryOf<'a, S>>) -> Option<Ordering> {
        self.base().partial_cmp(sentinel.base())
    }
}

impl<'a, E, S> PartialOrd<TextIter<'a, E, S>> for TextSentinel<BoundaryOf<'a, S>>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: MultiPassCursor,
    BoundaryOf<'a, S>: PartialOrd<CursorOf<'a, S>>,
{
    fn partial_cmp(&self, iter: &TextIter<'a, E, S>) -> Option<Ordering> {
        self.base().partial_cmp(iter.base())
    }
}

impl<'a, E, S> AddAssign<isize> for TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    fn add_assign(&mut self, n: isize) {
        self.offset(n);
    }
}

impl<'a, E, S> SubAssign<isize> for TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    fn sub_assign(&mut self, n: isize) {
        self.offset(n.saturating_neg());
    }
}

impl<'a, E, S> Add<isize> for TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self.offset(n);
        self
    }
}

impl<'a, E, S> Add<TextIter<'a, E, S>> for isize
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    type Output = TextIter<'a, E, S>;

    fn add(self, iter: TextIter<'a, E, S>) -> TextIter<'a, E, S> {
        iter + self
    }
}

impl<'a, E, S> Sub<isize> for TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self.offset(n.saturating_neg());
        self
    }
}

impl<'a, E, S> Sub for &TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance_from(origin)
    }
}

impl<'a, E, S> Sub for TextIter<'a, E, S>
where
    E: FixedWidth,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: OffsetCursor,
{
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}
