//! Foundation types for the verikit analysis core.
//!
//! This module provides the primitives everything else is built on:
//! - [`BufferId`], [`TextBuffer`] - owned source text with a stable identity
//! - [`BufferRange`] - byte ranges that remember which buffer they view
//! - [`is_sub_range`], [`bounds_equal`] - identity-based range comparison
//!
//! This module has NO dependencies on other verikit modules.

mod buffer;
mod range;

pub use buffer::{BufferId, TextBuffer};
pub use range::{BufferRange, bounds_equal, is_sub_range};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
