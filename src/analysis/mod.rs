//! The query side of the core: stateless matchers, tree search, and the
//! rule-facing lint contract.

mod lint;
mod matcher;
mod search;

pub use lint::{LintViolation, SyntaxTreeLintRule};
pub use matcher::Matcher;
pub use search::{
    SearchMatch, SearchPolicy, SyntaxTreeContext, search_syntax_tree,
    search_syntax_tree_with_policy,
};
