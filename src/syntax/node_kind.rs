//! The closed node-kind enumeration for CST interior nodes.

/// All interior-node kinds in the supported SystemVerilog subset.
///
/// Shared by the tree-builder, the accessor layer, and the matcher engine;
/// child-index contracts in [`crate::cst`] are stated against these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum NodeKind {
    /// Whole-file root.
    SourceText,
    ModuleDeclaration,
    ModuleHeader,
    ModuleItemList,
    /// Parenthesized ANSI port list of a module header.
    PortDeclarationList,
    /// One ANSI port declaration: direction, net type, data type,
    /// identifier, dimensions.
    PortDeclaration,
    TaskDeclaration,
    FunctionDeclaration,
    TaskFunctionPortList,
    /// One task/function port: direction, then type+identifier+dimensions.
    PortItem,
    DataType,
    /// The type+identifier+dimensions triple inside a [`Self::PortItem`].
    DataTypeImplicitBasicIdDimensions,
    /// One-child wrapper around an identifier leaf.
    UnqualifiedId,
    DeclarationDimensions,
    StatementList,
}
