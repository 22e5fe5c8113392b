mod error;

use std::iter::FusedIterator;

use log::trace;

pub use error::{ReadError, ReadResult};


/// Forward-only reader over a borrowed slice.
///
/// Works like a stream over memory that is already resident: elements are
/// consumed one at a time with [`SliceReader::read`] or in runs delimited by a
/// predicate. Runs are returned as sub-slices, nothing is copied.
///
/// Once every element has been consumed, all reads report [`ReadError::Eos`].
#[derive(Debug)]
pub struct SliceReader<'a, T> {
    slice: &'a [T],
    pos: usize,
}

/// Whether the element that stopped a scan belongs to the run
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Boundary {
    Exclusive,
    Inclusive,
}

impl<'a, T> SliceReader<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Returns the number of the unread elements.
    pub fn len(&self) -> usize {
        self.slice.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the original length of the underlying slice.
    ///
    /// The returned value is always the same and is not affected by reads.
    pub fn size(&self) -> usize {
        self.slice.len()
    }

    /// Offset of the next unread element
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check without consuming
    pub fn peek(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }

    /// Reads a single element, or returns [`ReadError::Eos`] if none is left.
    pub fn read(&mut self) -> ReadResult<&'a T> {
        let Some(elem) = self.slice.get(self.pos) else {
            trace!("read at {}: end of stream", self.pos);
            return Err(ReadError::Eos);
        };

        self.pos += 1;
        Ok(elem)
    }

    /// Reads up to the element before the one for which `predicate` returns false.
    ///
    /// If the end of the slice is reached first, the elements read so far are
    /// returned together with [`ReadError::Eos`].
    pub fn read_while(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> (&'a [T], ReadResult<()>) {
        self.scan(|e| !predicate(e), Boundary::Exclusive)
    }

    /// Reads up to the element before the one for which `predicate` returns true.
    ///
    /// End of slice is handled as in [`SliceReader::read_while`].
    pub fn read_until(
        &mut self,
        predicate: impl FnMut(&T) -> bool,
    ) -> (&'a [T], ReadResult<()>) {
        self.scan(predicate, Boundary::Exclusive)
    }

    /// Like [`SliceReader::read_while`], but the element for which `predicate`
    /// returns false is consumed and included in the run.
    pub fn read_while_incl(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> (&'a [T], ReadResult<()>) {
        self.scan(|e| !predicate(e), Boundary::Inclusive)
    }

    /// Like [`SliceReader::read_until`], but the element for which `predicate`
    /// returns true is consumed and included in the run.
    pub fn read_until_incl(
        &mut self,
        predicate: impl FnMut(&T) -> bool,
    ) -> (&'a [T], ReadResult<()>) {
        self.scan(predicate, Boundary::Inclusive)
    }

    /// Shared by every run read.
    ///
    /// Consumes elements until `stop` returns true. Without a stop element the
    /// whole remainder is consumed and Eos is reported alongside it.
    fn scan(
        &mut self,
        mut stop: impl FnMut(&T) -> bool,
        boundary: Boundary,
    ) -> (&'a [T], ReadResult<()>) {
        let slice = self.slice;
        let start = self.pos;

        while let Some(elem) = slice.get(self.pos) {
            if stop(elem) {
                if boundary == Boundary::Inclusive {
                    self.pos += 1;
                }

                trace!("run {}..{} stopped ({:?})", start, self.pos, boundary);
                return (&slice[start..self.pos], Ok(()));
            }

            self.pos += 1;
        }

        trace!("run {}..{}: end of stream", start, self.pos);
        (&slice[start..], Err(ReadError::Eos))
    }
}

impl<'a, T> From<&'a [T]> for SliceReader<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T> From<&'a Vec<T>> for SliceReader<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        Self::new(vec.as_slice())
    }
}

impl<'a, T> Iterator for SliceReader<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = SliceReader::len(self);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for SliceReader<'_, T> {}

impl<T> FusedIterator for SliceReader<'_, T> {}
