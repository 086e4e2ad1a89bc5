//! Named queries over the SystemVerilog CST.
//!
//! Each `find_all_*` function is a named Matcher + Search composition; each
//! `get_*` accessor descends through fixed child indices with kind checks.
//! These are the only entry points lint rules use to locate constructs.

pub mod matchers;
pub mod module;
pub mod port;

pub use matchers::{node_module_declaration, node_port_declaration, node_port_item};
pub use module::{find_all_module_declarations, get_module_name_token};
pub use port::{
    find_all_module_port_declarations, find_all_task_function_port_items,
    get_identifier_from_module_port_declaration, get_identifier_from_task_function_port_item,
    get_type_of_task_function_port_item,
};
