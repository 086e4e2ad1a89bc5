//! The concrete syntax tree: the [`Symbol`] model and kind-checked
//! accessors.
//!
//! A tree is built once per compilation unit by the external tree-builder,
//! is immutable afterwards, and is read concurrently by searches and
//! accessors. Accessor misuse (wrong kind, out-of-range child index) is
//! treated as a grammar or rule-author bug and aborts the unit's analysis -
//! see [`tree_utils`].

mod identifier;
mod node_kind;
mod tree;
pub mod tree_utils;

pub use identifier::auto_unwrap_identifier;
pub use node_kind::NodeKind;
pub use tree::{Symbol, SyntaxTreeNode};
