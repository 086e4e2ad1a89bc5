//! Shared fixtures: hand-built CST shapes fed by real lexer output.
//!
//! The grammar-driven tree builder is an external collaborator, so tests
//! assemble the documented tree shapes directly from the tokens the lexer
//! produces for a fixed source string.
#![allow(dead_code)]

use verikit::{NodeKind, Symbol, TextBuffer, Token, VerilogLexer};

/// Lex a buffer and keep only the tokens that participate in the CST.
pub fn syntax_tokens(buffer: &TextBuffer) -> Vec<Token> {
    VerilogLexer::new(buffer)
        .filter(|t| VerilogLexer::keep_syntax_tree_tokens(t))
        .collect()
}

fn port_declaration(direction: Token, net: Token, identifier: Token) -> Symbol {
    Symbol::node(
        NodeKind::PortDeclaration,
        vec![
            Symbol::leaf(direction),
            Symbol::leaf(net),
            Symbol::node(NodeKind::DataType, vec![]),
            Symbol::node(NodeKind::UnqualifiedId, vec![Symbol::leaf(identifier)]),
            Symbol::node(NodeKind::DeclarationDimensions, vec![]),
        ],
    )
}

/// `module m; endmodule` - a module with no ports.
pub fn empty_module() -> (TextBuffer, Symbol) {
    let buffer = TextBuffer::new("module m; endmodule");
    let t = syntax_tokens(&buffer);
    assert_eq!(t.len(), 4);
    let tree = Symbol::node(
        NodeKind::ModuleDeclaration,
        vec![
            Symbol::node(
                NodeKind::ModuleHeader,
                vec![Symbol::leaf(t[0]), Symbol::leaf(t[1]), Symbol::leaf(t[2])],
            ),
            Symbol::node(NodeKind::ModuleItemList, vec![]),
            Symbol::leaf(t[3]),
        ],
    );
    (buffer, tree)
}

/// `module m(input wire a, output wire b); endmodule` - two ANSI ports.
pub fn two_port_module() -> (TextBuffer, Symbol) {
    let buffer = TextBuffer::new("module m(input wire a, output wire b); endmodule");
    let t = syntax_tokens(&buffer);
    assert_eq!(t.len(), 13);
    let tree = Symbol::node(
        NodeKind::ModuleDeclaration,
        vec![
            Symbol::node(
                NodeKind::ModuleHeader,
                vec![
                    Symbol::leaf(t[0]),
                    Symbol::leaf(t[1]),
                    Symbol::node(
                        NodeKind::PortDeclarationList,
                        vec![
                            Symbol::leaf(t[2]),
                            port_declaration(t[3], t[4], t[5]),
                            Symbol::leaf(t[6]),
                            port_declaration(t[7], t[8], t[9]),
                            Symbol::leaf(t[10]),
                        ],
                    ),
                    Symbol::leaf(t[11]),
                ],
            ),
            Symbol::node(NodeKind::ModuleItemList, vec![]),
            Symbol::leaf(t[12]),
        ],
    );
    (buffer, tree)
}

/// `task t(input integer x); endtask` - one task port item.
pub fn task_with_port() -> (TextBuffer, Symbol) {
    let buffer = TextBuffer::new("task t(input integer x); endtask");
    let t = syntax_tokens(&buffer);
    assert_eq!(t.len(), 9);
    let port_item = Symbol::node(
        NodeKind::PortItem,
        vec![
            Symbol::leaf(t[3]),
            Symbol::node(
                NodeKind::DataTypeImplicitBasicIdDimensions,
                vec![
                    Symbol::node(NodeKind::DataType, vec![Symbol::leaf(t[4])]),
                    Symbol::node(NodeKind::UnqualifiedId, vec![Symbol::leaf(t[5])]),
                    Symbol::node(NodeKind::DeclarationDimensions, vec![]),
                ],
            ),
        ],
    );
    let tree = Symbol::node(
        NodeKind::TaskDeclaration,
        vec![
            Symbol::leaf(t[0]),
            Symbol::leaf(t[1]),
            Symbol::node(
                NodeKind::TaskFunctionPortList,
                vec![Symbol::leaf(t[2]), port_item, Symbol::leaf(t[6])],
            ),
            Symbol::leaf(t[7]),
            Symbol::leaf(t[8]),
        ],
    );
    (buffer, tree)
}

/// `module m; endmodule` followed by `module n; endmodule` under one root.
pub fn two_modules() -> (TextBuffer, Symbol) {
    let buffer = TextBuffer::new("module m; endmodule\nmodule n; endmodule");
    let t = syntax_tokens(&buffer);
    assert_eq!(t.len(), 8);
    let module = |t: &[Token]| {
        Symbol::node(
            NodeKind::ModuleDeclaration,
            vec![
                Symbol::node(
                    NodeKind::ModuleHeader,
                    vec![Symbol::leaf(t[0]), Symbol::leaf(t[1]), Symbol::leaf(t[2])],
                ),
                Symbol::node(NodeKind::ModuleItemList, vec![]),
                Symbol::leaf(t[3]),
            ],
        )
    };
    let tree = Symbol::node(
        NodeKind::SourceText,
        vec![module(&t[..4]), module(&t[4..])],
    );
    (buffer, tree)
}
