//! Port queries and accessors.
//!
//! Child-index contracts:
//! - [`NodeKind::PortDeclaration`]: child 3 is the declared identifier,
//!   possibly wrapped in one [`NodeKind::UnqualifiedId`] level.
//! - [`NodeKind::PortItem`]: child 1 is the
//!   [`NodeKind::DataTypeImplicitBasicIdDimensions`] triple, whose child 0
//!   is the [`NodeKind::DataType`] and child 1 the declared identifier.

use crate::analysis::{SearchMatch, search_syntax_tree};
use crate::parser::Token;
use crate::syntax::tree_utils::{
    get_subtree_as_node, get_subtree_as_symbol, structural_mismatch,
};
use crate::syntax::{NodeKind, Symbol, SyntaxTreeNode, auto_unwrap_identifier};

use super::matchers::{node_port_declaration, node_port_item};

/// All ANSI module port declarations under `root`, in source order.
pub fn find_all_module_port_declarations(root: &Symbol) -> Vec<SearchMatch<'_>> {
    search_syntax_tree(root, &node_port_declaration())
}

/// All task/function port items under `root`, in source order.
pub fn find_all_task_function_port_items(root: &Symbol) -> Vec<SearchMatch<'_>> {
    search_syntax_tree(root, &node_port_item())
}

/// The declared identifier of a module port declaration.
///
/// `symbol` must be a [`NodeKind::PortDeclaration`] node; anything else
/// aborts the unit's analysis.
pub fn get_identifier_from_module_port_declaration(symbol: &Symbol) -> &Token {
    let identifier = get_subtree_as_symbol(symbol, NodeKind::PortDeclaration, 3);
    match auto_unwrap_identifier(identifier) {
        Some(token) => token,
        None => structural_mismatch("port declaration child 3 is not an identifier"),
    }
}

fn get_type_id_dimensions_from_task_function_port_item(symbol: &Symbol) -> &Symbol {
    get_subtree_as_symbol(symbol, NodeKind::PortItem, 1)
}

/// The declared type of a task/function port item.
pub fn get_type_of_task_function_port_item(symbol: &Symbol) -> &SyntaxTreeNode {
    let type_id_dimensions = get_type_id_dimensions_from_task_function_port_item(symbol);
    get_subtree_as_node(
        type_id_dimensions,
        NodeKind::DataTypeImplicitBasicIdDimensions,
        0,
        NodeKind::DataType,
    )
}

/// The declared identifier of a task/function port item.
pub fn get_identifier_from_task_function_port_item(symbol: &Symbol) -> &Token {
    let type_id_dimensions = get_type_id_dimensions_from_task_function_port_item(symbol);
    let identifier = get_subtree_as_symbol(
        type_id_dimensions,
        NodeKind::DataTypeImplicitBasicIdDimensions,
        1,
    );
    match auto_unwrap_identifier(identifier) {
        Some(token) => token,
        None => structural_mismatch("port item identifier slot is not an identifier"),
    }
}
