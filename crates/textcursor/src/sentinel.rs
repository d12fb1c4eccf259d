use core::cmp::Ordering;

use crate::{
    TextIter,
    codec::Codec,
    storage::{CodeUnits, CursorOf, MultiPassCursor, UnitCursor},
};

/// An end marker that compares against [`TextIter`] without being one.
///
/// Holds only a storage boundary. Sentinels carry no distinguishing state, so
/// any two compare equal regardless of their boundaries.
#[derive(Debug, Clone, Copy)]
pub struct TextSentinel<B> {
    boundary: B,
}

impl<B> TextSentinel<B> {
    pub const fn new(boundary: B) -> Self {
        TextSentinel { boundary }
    }

    /// A sentinel at the end of `storage`.
    pub fn at_end<'a, S>(storage: &'a S) -> Self
    where
        S: CodeUnits + ?Sized + 'a,
        CursorOf<'a, S>: UnitCursor<Boundary = B>,
    {
        TextSentinel {
            boundary: storage.boundary(),
        }
    }

    pub fn base(&self) -> &B {
        &self.boundary
    }
}

/// Captures the iterator's current position as the boundary.
impl<'a, E, S> From<&TextIter<'a, E, S>> for TextSentinel<CursorOf<'a, S>>
where
    E: Codec,
    S: CodeUnits<Unit = E::Unit> + ?Sized + 'a,
    CursorOf<'a, S>: MultiPassCursor + UnitCursor<Boundary = CursorOf<'a, S>>,
{
    fn from(iter: &TextIter<'a, E, S>) -> Self {
        TextSentinel {
            boundary: iter.base().clone(),
        }
    }
}

impl<A, B> PartialEq<TextSentinel<B>> for TextSentinel<A> {
    fn eq(&self, _other: &TextSentinel<B>) -> bool {
        true
    }
}

impl<B> Eq for TextSentinel<B> {}

impl<A, B> PartialOrd<TextSentinel<B>> for TextSentinel<A> {
    fn partial_cmp(&self, _other: &TextSentinel<B>) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl<B> Ord for TextSentinel<B> {
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}
