//! Depth-first search over symbol trees.
//!
//! [`search_syntax_tree`] applies a matcher at every symbol of a tree in
//! pre-order and collects the matches in source order. Zero matches is a
//! normal outcome, not an error. The traversal is a pure read; many
//! searches may run concurrently against one tree.

use crate::syntax::{Symbol, SyntaxTreeNode};

use super::matcher::Matcher;

/// Enclosing-node chain of a match, outermost first. Does not include the
/// matched symbol itself.
pub type SyntaxTreeContext<'a> = Vec<&'a SyntaxTreeNode>;

/// One search hit: a reference into the searched tree plus its positional
/// context. Valid only as long as the tree it references.
#[derive(Debug, Clone)]
pub struct SearchMatch<'a> {
    pub symbol: &'a Symbol,
    pub context: SyntaxTreeContext<'a>,
}

/// What to do with matches nested inside an already-matched subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    /// Report every symbol satisfying the predicate, in document order.
    /// A match does not suppress descent into its own children.
    #[default]
    ReportAll,
    /// Report only the shallowest matches: do not descend below a match.
    ShallowestOnly,
}

/// Search `root` with the default [`SearchPolicy::ReportAll`] policy.
///
/// Results are in stable source order: non-decreasing by start offset of
/// the matched symbol's range.
pub fn search_syntax_tree<'a>(root: &'a Symbol, matcher: &Matcher) -> Vec<SearchMatch<'a>> {
    search_syntax_tree_with_policy(root, matcher, SearchPolicy::ReportAll)
}

/// Search `root`, with nested-match handling chosen by `policy`.
pub fn search_syntax_tree_with_policy<'a>(
    root: &'a Symbol,
    matcher: &Matcher,
    policy: SearchPolicy,
) -> Vec<SearchMatch<'a>> {
    let mut matches = Vec::new();
    let mut context = SyntaxTreeContext::new();
    visit(root, matcher, policy, &mut context, &mut matches);
    matches
}

fn visit<'a>(
    symbol: &'a Symbol,
    matcher: &Matcher,
    policy: SearchPolicy,
    context: &mut SyntaxTreeContext<'a>,
    matches: &mut Vec<SearchMatch<'a>>,
) {
    let matched = matcher.matches(symbol);
    if matched {
        matches.push(SearchMatch {
            symbol,
            context: context.clone(),
        });
        if policy == SearchPolicy::ShallowestOnly {
            return;
        }
    }
    if let Symbol::Node(node) = symbol {
        context.push(node);
        for child in node.children() {
            visit(child, matcher, policy, context, matches);
        }
        context.pop();
    }
}
