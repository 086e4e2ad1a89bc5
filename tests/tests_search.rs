//! Tree search over built CSTs: ordering, context chains, composition,
//! and nested-match policy.

mod helpers;

use verikit::cst::{
    find_all_module_declarations, find_all_module_port_declarations, node_port_declaration,
};
use verikit::{
    Matcher, NodeKind, SearchPolicy, Symbol, TokenKind, search_syntax_tree,
    search_syntax_tree_with_policy,
};

#[test]
fn module_without_ports_yields_no_matches() {
    let (_buffer, tree) = helpers::empty_module();
    assert!(find_all_module_port_declarations(&tree).is_empty());
}

#[test]
fn two_ports_are_reported_in_source_order() {
    let (_buffer, tree) = helpers::two_port_module();
    let matches = find_all_module_port_declarations(&tree);
    assert_eq!(matches.len(), 2);

    let first = matches[0].symbol.range().unwrap();
    let second = matches[1].symbol.range().unwrap();
    assert!(first.start() <= second.start());
    assert_eq!(first.buffer(), second.buffer());
}

#[test]
fn match_context_is_the_enclosing_chain_outermost_first() {
    let (_buffer, tree) = helpers::two_port_module();
    let matches = find_all_module_port_declarations(&tree);
    let context_kinds: Vec<NodeKind> = matches[0].context.iter().map(|n| n.kind()).collect();
    assert_eq!(
        context_kinds,
        vec![
            NodeKind::ModuleDeclaration,
            NodeKind::ModuleHeader,
            NodeKind::PortDeclarationList,
        ]
    );
}

#[test]
fn child_submatcher_narrows_a_query() {
    let (_buffer, tree) = helpers::two_port_module();
    // Only the `input` port, not the `output` one.
    let inputs_only = node_port_declaration().child(0, Matcher::leaf(TokenKind::Input));
    let matches = search_syntax_tree(&tree, &inputs_only);
    assert_eq!(matches.len(), 1);
}

#[test]
fn conjunction_of_disjoint_kinds_matches_nothing() {
    let (_buffer, tree) = helpers::two_port_module();
    let impossible =
        Matcher::node(NodeKind::PortDeclaration).and(Matcher::node(NodeKind::DataType));
    assert!(search_syntax_tree(&tree, &impossible).is_empty());
}

#[test]
fn leaf_matcher_finds_tokens_in_source_order() {
    let (buffer, tree) = helpers::two_modules();
    let matches = search_syntax_tree(&tree, &Matcher::leaf(TokenKind::Identifier));
    let names: Vec<&str> = matches
        .iter()
        .map(|m| m.symbol.as_leaf().unwrap().text(&buffer))
        .collect();
    assert_eq!(names, vec!["m", "n"]);
}

#[test]
fn multiple_modules_are_found_in_document_order() {
    let (_buffer, tree) = helpers::two_modules();
    let matches = find_all_module_declarations(&tree);
    assert_eq!(matches.len(), 2);
    for found in &matches {
        assert_eq!(found.context.len(), 1);
        assert_eq!(found.context[0].kind(), NodeKind::SourceText);
    }
}

fn nested_item_lists() -> Symbol {
    Symbol::node(
        NodeKind::ModuleItemList,
        vec![Symbol::node(
            NodeKind::StatementList,
            vec![Symbol::node(NodeKind::ModuleItemList, vec![])],
        )],
    )
}

#[test]
fn report_all_still_descends_into_matched_subtrees() {
    let tree = nested_item_lists();
    let matches = search_syntax_tree(&tree, &Matcher::node(NodeKind::ModuleItemList));
    // The root matches and its nested occurrence is still a separate entry.
    assert_eq!(matches.len(), 2);
    assert!(matches[0].context.is_empty());
    assert_eq!(matches[1].context.len(), 2);
}

#[test]
fn shallowest_only_policy_stops_below_a_match() {
    let tree = nested_item_lists();
    let shallow = search_syntax_tree_with_policy(
        &tree,
        &Matcher::node(NodeKind::ModuleItemList),
        SearchPolicy::ShallowestOnly,
    );
    assert_eq!(shallow.len(), 1);
    assert!(shallow[0].context.is_empty());
}

#[test]
fn one_matcher_is_reusable_across_trees() {
    let matcher = node_port_declaration();
    let (_b1, with_ports) = helpers::two_port_module();
    let (_b2, without_ports) = helpers::empty_module();
    assert_eq!(search_syntax_tree(&with_ports, &matcher).len(), 2);
    assert!(search_syntax_tree(&without_ports, &matcher).is_empty());
    // Still usable afterwards; matchers retain nothing from the trees.
    assert_eq!(search_syntax_tree(&with_ports, &matcher).len(), 2);
}
