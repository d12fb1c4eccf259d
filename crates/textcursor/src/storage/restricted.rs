//! Slice storages with some cursor powers withheld, for driving an iterator
//! at a lower tier than a plain slice would give.

use super::{BoundaryOf, CodeUnits, MultiPassCursor, ReversibleCursor, SliceCursor, UnitCursor, UnitRange};
use crate::capability::Traversal;

/// A slice read through a cursor that only moves forward.
#[derive(Debug)]
pub struct ForwardOnly<'a, T>(pub &'a [T]);

/// A slice read through a cursor that walks both ways but cannot jump.
#[derive(Debug)]
pub struct BidiOnly<'a, T>(pub &'a [T]);

#[derive(Debug)]
pub struct ForwardCursor<'a, T>(SliceCursor<'a, T>);

#[derive(Debug)]
pub struct BidiCursor<'a, T>(SliceCursor<'a, T>);

macro_rules! restricted_cursor {
    ($storage:ident, $cursor:ident, $traversal:expr) => {
        impl<T> $cursor<'_, T> {
            #[must_use]
            pub fn position(&self) -> usize {
                self.0.position()
            }
        }

        impl<T> Clone for $cursor<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $cursor<'_, T> {}

        impl<T> PartialEq for $cursor<'_, T> {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<T> Eq for $cursor<'_, T> {}

        impl<T: Copy> UnitCursor for $cursor<'_, T> {
            type Unit = T;
            type Boundary = Self;
            type Span = UnitRange<Self>;

            const TRAVERSAL: Traversal = $traversal;

            fn is_at(&self, end: &Self) -> bool {
                self.0.is_at(&end.0)
            }

            fn peek_unit(&self, end: &Self) -> Option<T> {
                self.0.peek_unit(&end.0)
            }

            fn next_unit(&mut self, end: &Self) -> Option<T> {
                self.0.next_unit(&end.0)
            }
        }

        impl<T: Copy> MultiPassCursor for $cursor<'_, T> {}

        impl<T: Copy> CodeUnits for $storage<'_, T> {
            type Unit = T;
            type Cursor<'b>
                = $cursor<'b, T>
            where
                Self: 'b;

            fn cursor(&self) -> $cursor<'_, T> {
                $cursor(self.0.cursor())
            }

            fn boundary(&self) -> BoundaryOf<'_, Self> {
                $cursor(self.0.boundary())
            }
        }
    };
}

restricted_cursor!(ForwardOnly, ForwardCursor, Traversal::MultiPass);
restricted_cursor!(BidiOnly, BidiCursor, Traversal::Reversible);

impl<T: Copy> ReversibleCursor for BidiCursor<'_, T> {
    fn prev_unit(&mut self, start: &Self) -> Option<T> {
        self.0.prev_unit(&start.0)
    }
}
