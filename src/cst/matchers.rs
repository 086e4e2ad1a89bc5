//! Named node matchers for SystemVerilog CST shapes.

use crate::analysis::Matcher;
use crate::syntax::NodeKind;

pub fn node_module_declaration() -> Matcher {
    Matcher::node(NodeKind::ModuleDeclaration)
}

pub fn node_port_declaration() -> Matcher {
    Matcher::node(NodeKind::PortDeclaration)
}

pub fn node_port_item() -> Matcher {
    Matcher::node(NodeKind::PortItem)
}
