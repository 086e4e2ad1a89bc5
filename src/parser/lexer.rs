//! Logos-based lexer adapter for SystemVerilog.
//!
//! Fast tokenization using the logos crate. The generated scanner is the
//! table-driven part; [`VerilogLexer`] is the adapter around it that
//! produces [`Token`]s, supports restarting on a new buffer, and exposes the
//! error and tree-relevance predicates.

use logos::Logos;
use tracing::debug;

use crate::base::TextBuffer;

use super::token::Token;
use super::token_kind::TokenKind;

/// Lexer adapter wrapping the logos-generated scanner.
///
/// One adapter instance can be reused across compilation units via
/// [`restart`](Self::restart); all scanner-private state (the DFA position
/// and the emission counter) is reset on restart.
pub struct VerilogLexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    buffer: &'a TextBuffer,
    tokens_emitted: u32,
}

impl<'a> VerilogLexer<'a> {
    pub fn new(buffer: &'a TextBuffer) -> Self {
        Self {
            inner: LogosToken::lexer(buffer.text()),
            buffer,
            tokens_emitted: 0,
        }
    }

    /// Reset the adapter onto a new buffer, discarding all internal state.
    pub fn restart(&mut self, buffer: &'a TextBuffer) {
        debug!(
            tokens_emitted = self.tokens_emitted,
            previous = ?self.buffer.name(),
            next = ?buffer.name(),
            "restarting lexer"
        );
        *self = Self::new(buffer);
    }

    /// Advance the scanner and return the next token; `None` is the end
    /// marker.
    pub fn next_token(&mut self) -> Option<Token> {
        self.next()
    }

    /// True for tokens the scanner rejected (unterminated literal or
    /// comment, character outside the language).
    ///
    /// Error tokens stay in the stream so later stages can localize lex
    /// failures without aborting the whole unit.
    pub fn token_is_error(token: &Token) -> bool {
        token.kind() == TokenKind::Error
    }

    /// Tree-relevance filter: whether a token participates in CST
    /// construction.
    ///
    /// Total over the kind space - every kind maps to exactly one decision.
    /// Trivia is excluded; everything else, including error tokens, is kept.
    pub fn keep_syntax_tree_tokens(token: &Token) -> bool {
        !token.kind().is_trivia()
    }
}

impl Iterator for VerilogLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let scanned = self.inner.next()?;
        let span = self.inner.span();
        let range = self.buffer.range(span.start as u32, span.end as u32);
        let kind = match scanned {
            Ok(token) => TokenKind::from(token),
            Err(()) => TokenKind::Error,
        };
        self.tokens_emitted += 1;
        Some(Token::new(kind, range, kind != TokenKind::Error))
    }
}

/// Logos token enum - maps to [`TokenKind`].
///
/// Unterminated strings and block comments get their own variants so the
/// scanner recovers at the next line or at end of input instead of erroring
/// character by character.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    // Star-tolerant body: runs of `*` inside the comment (and immediately
    // before the terminator) are still comment text.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedBlockComment,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("module")]
    Module,
    #[token("endmodule")]
    EndModule,
    #[token("task")]
    Task,
    #[token("endtask")]
    EndTask,
    #[token("function")]
    Function,
    #[token("endfunction")]
    EndFunction,
    #[token("input")]
    Input,
    #[token("output")]
    Output,
    #[token("inout")]
    Inout,
    #[token("wire")]
    Wire,
    #[token("reg")]
    Reg,
    #[token("logic")]
    Logic,
    #[token("integer")]
    Integer,
    #[token("signed")]
    Signed,
    #[token("unsigned")]
    Unsigned,
    #[token("parameter")]
    Parameter,
    #[token("assign")]
    Assign,
    #[token("begin")]
    Begin,
    #[token("end")]
    End,
    #[token("always")]
    Always,
    #[token("initial")]
    Initial,
    #[token("posedge")]
    Posedge,
    #[token("negedge")]
    Negedge,

    // =========================================================================
    // IDENTIFIERS AND LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Identifier,

    #[regex(r"\$[a-zA-Z_$][a-zA-Z0-9_$]*")]
    SystemIdentifier,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?")]
    DecimalNumber,

    // Based literals: optional size, base letter, digits (4'b1010, 'hFF).
    #[regex(r"([0-9][0-9_]*)?'[sS]?[bB][01xXzZ?_]+")]
    #[regex(r"([0-9][0-9_]*)?'[sS]?[oO][0-7xXzZ?_]+")]
    #[regex(r"([0-9][0-9_]*)?'[sS]?[dD][0-9_]+")]
    #[regex(r"([0-9][0-9_]*)?'[sS]?[hH][0-9a-fA-FxXzZ?_]+")]
    BasedNumber,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    // =========================================================================
    // PUNCTUATION AND OPERATORS
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("#")]
    Hash,
    #[token("@")]
    At,
    #[token("?")]
    Question,
    #[token("=")]
    Equals,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEq,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => Self::Whitespace,
            LogosToken::Newline => Self::Newline,
            LogosToken::LineComment => Self::LineComment,
            LogosToken::BlockComment => Self::BlockComment,
            LogosToken::UnterminatedBlockComment => Self::Error,
            LogosToken::Module => Self::Module,
            LogosToken::EndModule => Self::EndModule,
            LogosToken::Task => Self::Task,
            LogosToken::EndTask => Self::EndTask,
            LogosToken::Function => Self::Function,
            LogosToken::EndFunction => Self::EndFunction,
            LogosToken::Input => Self::Input,
            LogosToken::Output => Self::Output,
            LogosToken::Inout => Self::Inout,
            LogosToken::Wire => Self::Wire,
            LogosToken::Reg => Self::Reg,
            LogosToken::Logic => Self::Logic,
            LogosToken::Integer => Self::Integer,
            LogosToken::Signed => Self::Signed,
            LogosToken::Unsigned => Self::Unsigned,
            LogosToken::Parameter => Self::Parameter,
            LogosToken::Assign => Self::Assign,
            LogosToken::Begin => Self::Begin,
            LogosToken::End => Self::End,
            LogosToken::Always => Self::Always,
            LogosToken::Initial => Self::Initial,
            LogosToken::Posedge => Self::Posedge,
            LogosToken::Negedge => Self::Negedge,
            LogosToken::Identifier => Self::Identifier,
            LogosToken::SystemIdentifier => Self::SystemIdentifier,
            LogosToken::DecimalNumber | LogosToken::BasedNumber => Self::Number,
            LogosToken::StringLiteral => Self::StringLiteral,
            LogosToken::UnterminatedString => Self::Error,
            LogosToken::LParen => Self::LParen,
            LogosToken::RParen => Self::RParen,
            LogosToken::LBracket => Self::LBracket,
            LogosToken::RBracket => Self::RBracket,
            LogosToken::LBrace => Self::LBrace,
            LogosToken::RBrace => Self::RBrace,
            LogosToken::Semicolon => Self::Semicolon,
            LogosToken::Comma => Self::Comma,
            LogosToken::Dot => Self::Dot,
            LogosToken::Colon => Self::Colon,
            LogosToken::Hash => Self::Hash,
            LogosToken::At => Self::At,
            LogosToken::Question => Self::Question,
            LogosToken::Equals => Self::Equals,
            LogosToken::EqEq => Self::EqEq,
            LogosToken::BangEq => Self::BangEq,
            LogosToken::Less => Self::Less,
            LogosToken::LessEq => Self::LessEq,
            LogosToken::Greater => Self::Greater,
            LogosToken::GreaterEq => Self::GreaterEq,
            LogosToken::Plus => Self::Plus,
            LogosToken::Minus => Self::Minus,
            LogosToken::Star => Self::Star,
            LogosToken::Slash => Self::Slash,
            LogosToken::Percent => Self::Percent,
            LogosToken::Amp => Self::Amp,
            LogosToken::AmpAmp => Self::AmpAmp,
            LogosToken::Pipe => Self::Pipe,
            LogosToken::PipePipe => Self::PipePipe,
            LogosToken::Caret => Self::Caret,
            LogosToken::Tilde => Self::Tilde,
            LogosToken::Bang => Self::Bang,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        let buffer = TextBuffer::new(text);
        VerilogLexer::new(&buffer).map(|t| t.kind()).collect()
    }

    #[test]
    fn lexes_module_header() {
        assert_eq!(
            kinds("module m;"),
            vec![
                TokenKind::Module,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn lexes_number_forms() {
        assert_eq!(kinds("42"), vec![TokenKind::Number]);
        assert_eq!(kinds("4'b1010"), vec![TokenKind::Number]);
        assert_eq!(kinds("'hFF"), vec![TokenKind::Number]);
        assert_eq!(kinds("3.14"), vec![TokenKind::Number]);
    }

    #[test]
    fn lexes_comments() {
        assert_eq!(kinds("// line"), vec![TokenKind::LineComment]);
        assert_eq!(kinds("/* block */"), vec![TokenKind::BlockComment]);
        assert_eq!(kinds("/* open"), vec![TokenKind::Error]);
        assert_eq!(kinds("/* open *"), vec![TokenKind::Error]);
    }

    #[test]
    fn block_comment_bodies_may_contain_stars() {
        assert_eq!(kinds("/* ** */"), vec![TokenKind::BlockComment]);
        assert_eq!(kinds("/* a **/"), vec![TokenKind::BlockComment]);
        assert_eq!(kinds("/***/"), vec![TokenKind::BlockComment]);
        assert_eq!(kinds("/* a * b */"), vec![TokenKind::BlockComment]);
    }

    #[test]
    fn keywords_beat_identifiers() {
        assert_eq!(kinds("wire"), vec![TokenKind::Wire]);
        assert_eq!(kinds("wires"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn system_identifier() {
        assert_eq!(kinds("$display"), vec![TokenKind::SystemIdentifier]);
    }
}
