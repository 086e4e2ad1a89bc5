//! The lexical token model.

use crate::base::{BufferRange, TextBuffer};

use super::token_kind::TokenKind;

/// A lexical token: kind tag, buffer-identified byte range, validity flag.
///
/// Tokens are produced by the lexer adapter and immutable afterwards. They
/// store no text of their own; the text is recovered by slicing the owning
/// buffer, so a token can never silently drift from the source it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    range: BufferRange,
    valid: bool,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, range: BufferRange, valid: bool) -> Self {
        Self { kind, range, valid }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn range(&self) -> BufferRange {
        self.range
    }

    /// False for tokens the scanner flagged as lexically invalid.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The token's text, resolved against its owning buffer.
    ///
    /// Panics if `buffer` is not the buffer this token was lexed from.
    pub fn text<'a>(&self, buffer: &'a TextBuffer) -> &'a str {
        buffer.slice(self.range)
    }
}
