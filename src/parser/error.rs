//! Located lexical diagnostics.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{BufferRange, TextBuffer};

use super::token::Token;

/// A recoverable, user-visible diagnostic for one lexically invalid token.
///
/// Lex errors flow through data: the offending token stays in the stream
/// tagged invalid, and consumers that want to report it build one of these.
/// Contrast with structural mismatches, which abort the unit's analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid token `{text}` at bytes {}..{}",
    u32::from(.range.start()),
    u32::from(.range.end())
)]
pub struct LexicalError {
    pub text: SmolStr,
    pub range: BufferRange,
}

impl LexicalError {
    /// Build a diagnostic for an invalid token.
    ///
    /// `buffer` must be the buffer the token was lexed from.
    pub fn from_token(token: &Token, buffer: &TextBuffer) -> Self {
        Self {
            text: SmolStr::new(token.text(buffer)),
            range: token.range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::VerilogLexer;

    #[test]
    fn diagnostic_localizes_invalid_token() {
        let buffer = TextBuffer::new("x = \"oops\nmodule");
        let bad = VerilogLexer::new(&buffer)
            .find(|t| VerilogLexer::token_is_error(t))
            .unwrap();
        let diagnostic = LexicalError::from_token(&bad, &buffer);
        assert_eq!(diagnostic.text, "\"oops");
        assert_eq!(u32::from(diagnostic.range.start()), 4);
        assert_eq!(u32::from(diagnostic.range.end()), 9);
        assert_eq!(diagnostic.range.buffer(), buffer.id());
        assert_eq!(
            diagnostic.to_string(),
            "invalid token `\"oops` at bytes 4..9"
        );
    }
}
