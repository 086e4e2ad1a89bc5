//! Composable, stateless predicates over symbols.
//!
//! A [`Matcher`] is a plain predicate value: it owns no tree state and
//! retains no references to the trees it is applied to, so a single value
//! can be shared read-only across many trees and threads. Composition is
//! explicit conjunction - there is no subclassing and no per-node virtual
//! dispatch.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::parser::TokenKind;
use crate::syntax::{NodeKind, Symbol};

type Predicate = Arc<dyn Fn(&Symbol) -> bool + Send + Sync>;

/// A stateless predicate over [`Symbol`]s, tagged with a human-readable
/// description of what it targets (for diagnostics only).
#[derive(Clone)]
pub struct Matcher {
    target: SmolStr,
    predicate: Predicate,
}

impl Matcher {
    /// Matches interior nodes of exactly this kind.
    pub fn node(kind: NodeKind) -> Self {
        Self {
            target: SmolStr::new(format!("{kind:?}")),
            predicate: Arc::new(move |symbol| {
                matches!(symbol, Symbol::Node(node) if node.kind() == kind)
            }),
        }
    }

    /// Matches leaves of exactly this token kind.
    pub fn leaf(kind: TokenKind) -> Self {
        Self {
            target: SmolStr::new(format!("{kind:?}")),
            predicate: Arc::new(move |symbol| {
                matches!(symbol, Symbol::Leaf(token) if token.kind() == kind)
            }),
        }
    }

    /// Conjunction: matches only symbols both matchers accept.
    pub fn and(self, other: Self) -> Self {
        let target = SmolStr::new(format!("{} & {}", self.target, other.target));
        let (a, b) = (self.predicate, other.predicate);
        Self {
            target,
            predicate: Arc::new(move |symbol| a(symbol) && b(symbol)),
        }
    }

    /// Secondary sub-matcher against a fixed child: matches symbols this
    /// matcher accepts whose child at `index` exists and satisfies `inner`.
    pub fn child(self, index: usize, inner: Self) -> Self {
        let target = SmolStr::new(format!("{}[{index}: {}]", self.target, inner.target));
        let outer = self.predicate;
        let inner = inner.predicate;
        Self {
            target,
            predicate: Arc::new(move |symbol| {
                outer(symbol)
                    && symbol
                        .as_node()
                        .and_then(|node| node.child(index))
                        .is_some_and(|child| inner(child))
            }),
        }
    }

    /// What this matcher targets, for diagnostics.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Apply the predicate. Pure; never mutates or retains `symbol`.
    pub fn matches(&self, symbol: &Symbol) -> bool {
        (self.predicate)(symbol)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matcher").field(&self.target).finish()
    }
}
