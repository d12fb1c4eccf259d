use core::{cell::RefCell, fmt, iter::Peekable};

use super::{CodeUnits, Pass, UnitCursor};
use crate::capability::Traversal;

/// Single-pass storage over any iterator of code units.
///
/// Every cursor handed out reads from the same underlying iterator, so a
/// cursor obtained later starts wherever earlier cursors stopped.
pub struct UnitStream<I: Iterator> {
    source: RefCell<Peekable<I>>,
}

impl<I: Iterator> UnitStream<I> {
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        UnitStream {
            source: RefCell::new(source.into_iter().peekable()),
        }
    }
}

impl<I: Iterator> fmt::Debug for UnitStream<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitStream").finish_non_exhaustive()
    }
}

/// The end of a [`UnitStream`]: wherever the iterator runs dry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamEnd;

pub struct StreamCursor<'a, I: Iterator> {
    source: &'a RefCell<Peekable<I>>,
}

impl<I: Iterator> fmt::Debug for StreamCursor<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor").finish_non_exhaustive()
    }
}

impl<I> UnitCursor for StreamCursor<'_, I>
where
    I: Iterator,
    I::Item: Copy,
{
    type Unit = I::Item;
    type Boundary = StreamEnd;
    type Span = Pass<Self>;

    const TRAVERSAL: Traversal = Traversal::SinglePass;

    fn is_at(&self, _end: &StreamEnd) -> bool {
        self.source.borrow_mut().peek().is_none()
    }

    fn peek_unit(&self, _end: &StreamEnd) -> Option<I::Item> {
        self.source.borrow_mut().peek().copied()
    }

    fn next_unit(&mut self, _end: &StreamEnd) -> Option<I::Item> {
        self.source.borrow_mut().next()
    }
}

impl<I> CodeUnits for UnitStream<I>
where
    I: Iterator,
    I::Item: Copy,
{
    type Unit = I::Item;
    type Cursor<'a>
        = StreamCursor<'a, I>
    where
        Self: 'a;

    fn cursor(&self) -> StreamCursor<'_, I> {
        StreamCursor {
            source: &self.source,
        }
    }

    fn boundary(&self) -> StreamEnd {
        StreamEnd
    }
}
