//! Lexical analysis: the logos-based lexer adapter and the token model.
//!
//! The adapter wraps the generated scanner and yields [`Token`]s carrying a
//! kind, a buffer-identified byte range, and a validity flag. Invalid input
//! is tagged, never dropped: the stream continues past lex errors so later
//! stages can localize them.

mod error;
mod lexer;
mod token;
mod token_kind;

pub use error::LexicalError;
pub use lexer::VerilogLexer;
pub use token::Token;
pub use token_kind::TokenKind;
