//! Byte ranges with buffer identity.
//!
//! Comparisons here are identity-based, not content-based: two ranges from
//! different buffers are never related, even if the text they cover is
//! byte-identical. This lets higher layers assert "this token really came
//! from this exact subtree's span" and catch tree-construction bugs that a
//! content comparison would mask.

use text_size::{TextRange, TextSize};

use super::buffer::BufferId;

/// A half-open byte interval `[start, end)` into one specific buffer.
///
/// Invariants (enforced at construction by [`TextBuffer::range`]):
/// `start <= end`, both within buffer bounds.
///
/// [`TextBuffer::range`]: super::TextBuffer::range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferRange {
    buffer: BufferId,
    range: TextRange,
}

impl BufferRange {
    pub(crate) fn new(buffer: BufferId, range: TextRange) -> Self {
        Self { buffer, range }
    }

    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }

    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// True iff `inner` views the same buffer as `outer` and lies fully within
/// its bounds.
///
/// An empty `inner` at a boundary position counts as contained when that
/// position lies within `[outer.start, outer.end]` inclusive. Abutting or
/// partially overlapping ranges are not sub-ranges in either direction, and
/// ranges from different buffers are never related.
pub fn is_sub_range(inner: BufferRange, outer: BufferRange) -> bool {
    inner.buffer == outer.buffer && outer.start() <= inner.start() && inner.end() <= outer.end()
}

/// True iff `a` and `b` have identical bounds in the same buffer.
///
/// Stricter than [`is_sub_range`] holding both ways: two distinct empty
/// ranges at different positions are never bounds-equal.
pub fn bounds_equal(a: BufferRange, b: BufferRange) -> bool {
    a.buffer == b.buffer && a.range == b.range
}
