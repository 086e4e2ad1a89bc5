//! Kind-checked navigation over symbol trees.
//!
//! All accessors here follow one pattern: verify the node kind, index into
//! the children at a fixed position, verify the child, return a reference.
//! A mismatch is proof of a corrupted or unexpected tree shape (a grammar
//! regression or a rule-author bug) and terminates analysis of the current
//! compilation unit immediately via [`structural_mismatch`]. Rules must not
//! catch this; returning a wrong node silently would let a lint emit false
//! results with no signal at all.

use tracing::error;

use crate::parser::Token;

use super::node_kind::NodeKind;
use super::tree::{Symbol, SyntaxTreeNode};

/// Abort analysis of the current compilation unit.
///
/// Reserved for provably-impossible tree shapes; anything reachable from
/// malformed user input goes through tagged tokens or empty results
/// instead, never through this path.
#[cold]
pub(crate) fn structural_mismatch(details: &str) -> ! {
    error!("structural mismatch: {details}");
    panic!("structural mismatch: {details}");
}

/// Cast a symbol to a node, aborting if it is a leaf.
pub fn symbol_cast_to_node(symbol: &Symbol) -> &SyntaxTreeNode {
    match symbol {
        Symbol::Node(node) => node,
        Symbol::Leaf(token) => structural_mismatch(&format!(
            "expected a node, found leaf {:?}",
            token.kind()
        )),
    }
}

/// Cast a symbol to a node of the given kind, aborting on mismatch.
pub fn check_symbol_as_node(symbol: &Symbol, kind: NodeKind) -> &SyntaxTreeNode {
    let node = symbol_cast_to_node(symbol);
    if node.kind() != kind {
        structural_mismatch(&format!(
            "expected a {kind:?} node, found {:?}",
            node.kind()
        ));
    }
    node
}

/// Descend into child `index` of a node of kind `parent`.
pub fn get_subtree_as_symbol(symbol: &Symbol, parent: NodeKind, index: usize) -> &Symbol {
    let node = check_symbol_as_node(symbol, parent);
    match node.child(index) {
        Some(child) => child,
        None => structural_mismatch(&format!(
            "{parent:?} has {} children, child {index} requested",
            node.children().len()
        )),
    }
}

/// Descend into child `index` of a `parent` node and check the child's kind.
pub fn get_subtree_as_node<'a>(
    symbol: &'a Symbol,
    parent: NodeKind,
    index: usize,
    child_kind: NodeKind,
) -> &'a SyntaxTreeNode {
    check_symbol_as_node(get_subtree_as_symbol(symbol, parent, index), child_kind)
}

/// Descend into child `index` of a `parent` node, expecting a leaf.
pub fn get_subtree_as_leaf(symbol: &Symbol, parent: NodeKind, index: usize) -> &Token {
    match get_subtree_as_symbol(symbol, parent, index) {
        Symbol::Leaf(token) => token,
        Symbol::Node(node) => structural_mismatch(&format!(
            "expected a leaf at child {index} of {parent:?}, found {:?} node",
            node.kind()
        )),
    }
}

/// The first token underneath a symbol, in source order.
pub fn get_leftmost_leaf(symbol: &Symbol) -> Option<&Token> {
    match symbol {
        Symbol::Leaf(token) => Some(token),
        Symbol::Node(node) => node.children().iter().find_map(get_leftmost_leaf),
    }
}

/// The last token underneath a symbol, in source order.
pub fn get_rightmost_leaf(symbol: &Symbol) -> Option<&Token> {
    match symbol {
        Symbol::Leaf(token) => Some(token),
        Symbol::Node(node) => node.children().iter().rev().find_map(get_rightmost_leaf),
    }
}
