//! Source text ownership for one compilation unit.
//!
//! A [`TextBuffer`] owns the raw bytes of one file and carries a stable
//! [`BufferId`] handle. Ranges derived from a buffer embed that handle, so
//! "does this range view that buffer" reduces to handle equality plus bounds
//! arithmetic - no comparison between unrelated allocations is ever needed.

use std::sync::atomic::{AtomicU32, Ordering};

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::range::BufferRange;

/// Stable, process-unique handle identifying one [`TextBuffer`].
///
/// Two buffers never share an id, even if their text is byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(u32);

static NEXT_BUFFER_ID: AtomicU32 = AtomicU32::new(0);

/// Immutable source text for one compilation unit.
///
/// Created once per unit by the parse pipeline, read many times by search
/// and accessors, and destroyed together with its derived token stream and
/// syntax tree. The optional name (usually a path) is opaque metadata passed
/// through to consumers; the core never interprets it.
#[derive(Debug)]
pub struct TextBuffer {
    id: BufferId,
    name: Option<SmolStr>,
    text: String,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)),
            name: None,
            text: text.into(),
        }
    }

    pub fn with_name(text: impl Into<String>, name: impl Into<SmolStr>) -> Self {
        let mut buffer = Self::new(text);
        buffer.name = Some(name.into());
        buffer
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(self.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Create a range into this buffer.
    ///
    /// Panics if `start > end` or `end` exceeds the buffer length; ranges
    /// are validated at construction so every live [`BufferRange`] is known
    /// to be in bounds.
    pub fn range(&self, start: impl Into<TextSize>, end: impl Into<TextSize>) -> BufferRange {
        let (start, end) = (start.into(), end.into());
        assert!(
            start <= end && end <= self.len(),
            "range {start:?}..{end:?} out of bounds for buffer of length {:?}",
            self.len()
        );
        BufferRange::new(self.id, TextRange::new(start, end))
    }

    /// The range covering the entire buffer.
    pub fn full_range(&self) -> BufferRange {
        BufferRange::new(self.id, TextRange::new(TextSize::new(0), self.len()))
    }

    /// Resolve a range back to its text.
    ///
    /// Panics if `range` was carved out of a different buffer; slicing is an
    /// identity operation, not a content lookup.
    pub fn slice(&self, range: BufferRange) -> &str {
        assert!(
            range.buffer() == self.id,
            "range {range:?} does not belong to buffer {:?}",
            self.id
        );
        &self.text[usize::from(range.start())..usize::from(range.end())]
    }
}
