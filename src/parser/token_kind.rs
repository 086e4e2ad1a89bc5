//! The closed token-kind enumeration.
//!
//! One finite enumeration shared identically by the lexer adapter, the
//! symbol tree, and the matcher layer - never duplicated. The set is closed
//! and totally ordered, with [`TokenKind::Error`] reserved for lexically
//! invalid input.

/// All lexical kinds in the supported SystemVerilog subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // =========================================================================
    // KEYWORDS
    // =========================================================================
    Module,
    EndModule,
    Task,
    EndTask,
    Function,
    EndFunction,
    Input,
    Output,
    Inout,
    Wire,
    Reg,
    Logic,
    Integer,
    Signed,
    Unsigned,
    Parameter,
    Assign,
    Begin,
    End,
    Always,
    Initial,
    Posedge,
    Negedge,

    // =========================================================================
    // IDENTIFIERS AND LITERALS
    // =========================================================================
    Identifier,
    SystemIdentifier, // $display, $finish, ...
    Number,
    StringLiteral,

    // =========================================================================
    // PUNCTUATION AND OPERATORS
    // =========================================================================
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Dot,
    Colon,
    Hash,
    At,
    Question,
    Equals,
    EqEq,
    BangEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    Tilde,
    Bang,

    // =========================================================================
    // TRIVIA (kept for ancillary use, excluded from the syntax tree)
    // =========================================================================
    Whitespace,
    Newline,
    LineComment,
    BlockComment,

    // =========================================================================
    // SENTINEL
    // =========================================================================
    /// Reserved kind for lexically invalid input (rejected characters,
    /// unterminated strings and block comments).
    Error,
}

impl TokenKind {
    /// Whether tokens of this kind are trivia.
    ///
    /// This is the tree-relevance decision for the whole kind space: trivia
    /// is retained in the raw stream for ancillary consumers (formatting,
    /// comment-aware rules) but never participates in CST construction.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::LineComment | Self::BlockComment
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Module
                | Self::EndModule
                | Self::Task
                | Self::EndTask
                | Self::Function
                | Self::EndFunction
                | Self::Input
                | Self::Output
                | Self::Inout
                | Self::Wire
                | Self::Reg
                | Self::Logic
                | Self::Integer
                | Self::Signed
                | Self::Unsigned
                | Self::Parameter
                | Self::Assign
                | Self::Begin
                | Self::End
                | Self::Always
                | Self::Initial
                | Self::Posedge
                | Self::Negedge
        )
    }
}
