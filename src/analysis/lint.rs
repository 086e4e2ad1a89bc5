//! The rule-facing contract.
//!
//! A lint rule is anything that, given a built tree (and the original text
//! for range-based diagnostics), produces zero or more located findings.
//! Rules are expected to go through the named query functions in
//! [`crate::cst`] and the kind-checked accessor layer; bypassing the kind
//! checks forfeits the fail-fast guarantee.

use smol_str::SmolStr;

use crate::base::TextBuffer;
use crate::parser::Token;
use crate::syntax::Symbol;

/// One finding: the offending token for source-location reporting, plus a
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintViolation {
    pub token: Token,
    pub message: SmolStr,
}

impl LintViolation {
    pub fn new(token: Token, message: impl Into<SmolStr>) -> Self {
        Self {
            token,
            message: message.into(),
        }
    }
}

/// Uniform interface of a syntax-tree lint rule.
///
/// Rule bodies live outside this crate; the core only fixes their shape so
/// a batch driver can run hundreds of them against one immutable tree.
pub trait SyntaxTreeLintRule {
    /// Stable rule name for reporting and configuration.
    fn name(&self) -> &'static str;

    /// Examine one compilation unit's tree and report violations.
    ///
    /// `buffer` is the unit's source text; its name, if any, is opaque
    /// metadata a rule may correlate against (e.g. declared names vs. file
    /// name).
    fn check(&self, root: &Symbol, buffer: &TextBuffer) -> Vec<LintViolation>;
}
