//! # verikit-base
//!
//! Core library for SystemVerilog language tooling: lexing, concrete
//! syntax tree (CST) modeling, and declarative syntax-tree search. Lint
//! rules, formatters, and indexers are built on this foundation; they live
//! outside this crate.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! cst       → Named queries (ports, modules) = Matcher + Search + accessors
//!   ↓
//! analysis  → Matcher engine, tree search, rule-facing lint contract
//!   ↓
//! syntax    → Symbol tree (CST), NodeKind, kind-checked tree accessors
//!   ↓
//! parser    → Logos lexer adapter, TokenKind, Token, lexical diagnostics
//!   ↓
//! base      → Primitives (BufferId, TextBuffer, identity-based ranges)
//! ```
//!
//! ## Error model
//!
//! Three failure classes, never conflated:
//! - lex errors flow through data (tokens tagged invalid, stream continues);
//! - structural mismatches in the accessor layer abort the unit's analysis
//!   (a grammar or rule bug, not a user-input problem);
//! - a search with zero results is an ordinary empty vector.

// ============================================================================
// MODULES (dependency order: base → parser → syntax → analysis → cst)
// ============================================================================

/// Foundation types: BufferId, TextBuffer, identity-based byte ranges
pub mod base;

/// Lexing: logos-based lexer adapter, token model, lexical diagnostics
pub mod parser;

/// Symbol tree model and kind-checked accessors
pub mod syntax;

/// Matcher engine, tree search, lint-rule contract
pub mod analysis;

/// Named queries over the SystemVerilog CST
pub mod cst;

// Re-export foundation types
pub use analysis::{
    LintViolation, Matcher, SearchMatch, SearchPolicy, SyntaxTreeLintRule, search_syntax_tree,
    search_syntax_tree_with_policy,
};
pub use base::{BufferId, BufferRange, TextBuffer, bounds_equal, is_sub_range};
pub use parser::{LexicalError, Token, TokenKind, VerilogLexer};
pub use syntax::{NodeKind, Symbol, SyntaxTreeNode};
