//! Module queries and accessors.
//!
//! Child-index contracts:
//! - [`NodeKind::ModuleDeclaration`]: child 0 is the
//!   [`NodeKind::ModuleHeader`].
//! - [`NodeKind::ModuleHeader`]: child 0 is the `module` keyword, child 1
//!   the module name identifier.

use crate::analysis::{SearchMatch, search_syntax_tree};
use crate::parser::{Token, TokenKind};
use crate::syntax::tree_utils::{get_subtree_as_leaf, get_subtree_as_symbol, structural_mismatch};
use crate::syntax::{NodeKind, Symbol};

use super::matchers::node_module_declaration;

/// All module declarations under `root`, in source order.
pub fn find_all_module_declarations(root: &Symbol) -> Vec<SearchMatch<'_>> {
    search_syntax_tree(root, &node_module_declaration())
}

/// The name token of a module declaration.
///
/// `symbol` must be a [`NodeKind::ModuleDeclaration`] node.
pub fn get_module_name_token(symbol: &Symbol) -> &Token {
    let header = get_subtree_as_symbol(symbol, NodeKind::ModuleDeclaration, 0);
    let name = get_subtree_as_leaf(header, NodeKind::ModuleHeader, 1);
    if name.kind() != TokenKind::Identifier {
        structural_mismatch("module header child 1 is not an identifier");
    }
    name
}
