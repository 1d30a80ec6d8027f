//! Domain layer - pure types and pure logic.
//!
//! Nothing in this module performs I/O. The document model and its
//! classifier are deterministic given their inputs.

pub mod document;
pub mod foundation;
