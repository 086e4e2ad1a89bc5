//! The tagged-variant symbol tree.
//!
//! Every token of the source survives into the tree (a CST, not an AST):
//! a [`Symbol`] is either a leaf wrapping exactly one token or an interior
//! node owning an ordered sequence of children. Strict tree - no sharing,
//! no cycles, children exclusively owned by their parent.

use text_size::TextRange;

use crate::base::BufferRange;
use crate::parser::Token;

use super::node_kind::NodeKind;

/// A node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Leaf(Token),
    Node(SyntaxTreeNode),
}

/// An interior node: kind tag plus ordered owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTreeNode {
    kind: NodeKind,
    children: Vec<Symbol>,
}

impl SyntaxTreeNode {
    /// Build a node from children already in source order.
    ///
    /// Debug builds verify the structural invariant: child ranges all view
    /// the same buffer and are monotonically non-decreasing without
    /// overlap.
    pub fn new(kind: NodeKind, children: Vec<Symbol>) -> Self {
        debug_assert!(
            children_are_ordered(&children),
            "children of {kind:?} are not in source order"
        );
        Self { kind, children }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[Symbol] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Symbol> {
        self.children.get(index)
    }

    /// The union of the children's ranges, in source order.
    ///
    /// `None` for nodes with no leaves underneath (e.g. an empty
    /// placeholder node).
    pub fn range(&self) -> Option<BufferRange> {
        let first = self.children.iter().find_map(Symbol::range)?;
        let last = self.children.iter().rev().find_map(Symbol::range)?;
        Some(BufferRange::new(
            first.buffer(),
            TextRange::new(first.start(), last.end()),
        ))
    }
}

impl Symbol {
    pub fn leaf(token: Token) -> Self {
        Self::Leaf(token)
    }

    pub fn node(kind: NodeKind, children: Vec<Symbol>) -> Self {
        Self::Node(SyntaxTreeNode::new(kind, children))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn as_leaf(&self) -> Option<&Token> {
        match self {
            Self::Leaf(token) => Some(token),
            Self::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxTreeNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }

    /// The symbol's effective source range (see [`SyntaxTreeNode::range`]).
    pub fn range(&self) -> Option<BufferRange> {
        match self {
            Self::Leaf(token) => Some(token.range()),
            Self::Node(node) => node.range(),
        }
    }
}

fn children_are_ordered(children: &[Symbol]) -> bool {
    let mut previous: Option<BufferRange> = None;
    for range in children.iter().filter_map(Symbol::range) {
        if let Some(previous) = previous
            && (previous.buffer() != range.buffer() || previous.end() > range.start())
        {
            return false;
        }
        previous = Some(range);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextBuffer;
    use crate::parser::VerilogLexer;

    #[test]
    fn node_range_is_union_of_children() {
        let buffer = TextBuffer::new("module m;");
        let tokens: Vec<Token> = VerilogLexer::new(&buffer)
            .filter(|t| VerilogLexer::keep_syntax_tree_tokens(t))
            .collect();
        let node = SyntaxTreeNode::new(
            NodeKind::ModuleHeader,
            tokens.into_iter().map(Symbol::leaf).collect(),
        );
        let range = node.range().unwrap();
        assert_eq!(range.buffer(), buffer.id());
        assert_eq!(u32::from(range.start()), 0);
        assert_eq!(u32::from(range.end()), 9);
    }

    #[test]
    fn empty_node_has_no_range() {
        let node = SyntaxTreeNode::new(NodeKind::ModuleItemList, vec![]);
        assert_eq!(node.range(), None);
    }

    #[test]
    fn empty_placeholder_children_are_skipped_in_range() {
        let buffer = TextBuffer::new("wire w;");
        let tokens: Vec<Token> = VerilogLexer::new(&buffer)
            .filter(|t| VerilogLexer::keep_syntax_tree_tokens(t))
            .collect();
        let node = SyntaxTreeNode::new(
            NodeKind::PortDeclaration,
            vec![
                Symbol::node(NodeKind::DataType, vec![]),
                Symbol::leaf(tokens[0]),
                Symbol::node(NodeKind::DeclarationDimensions, vec![]),
            ],
        );
        assert_eq!(node.range(), Some(tokens[0].range()));
    }
}
