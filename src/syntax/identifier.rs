//! Identifier extraction helpers.

use crate::parser::{Token, TokenKind};

use super::node_kind::NodeKind;
use super::tree::Symbol;

/// Unwrap an identifier leaf, looking through one [`NodeKind::UnqualifiedId`]
/// wrapper level if present.
///
/// Returns `None` when the symbol is neither an identifier leaf nor a
/// wrapper around one; callers that consider that shape impossible escalate
/// through the fatal accessor path.
pub fn auto_unwrap_identifier(symbol: &Symbol) -> Option<&Token> {
    match symbol {
        Symbol::Leaf(token) if token.kind() == TokenKind::Identifier => Some(token),
        Symbol::Node(node) if node.kind() == NodeKind::UnqualifiedId => node
            .child(0)?
            .as_leaf()
            .filter(|token| token.kind() == TokenKind::Identifier),
        _ => None,
    }
}
