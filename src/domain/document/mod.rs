//! Structured document model.
//!
//! The intermediate representation between template rendering and
//! format-specific serialization: ordered role-classified entries plus the
//! single shared GOST style table. Classification happens exactly once here
//! so that no formatting rule is duplicated per output backend.

mod formatter;
mod rendered;
mod structured;
mod style;

pub use formatter::DocumentFormatter;
pub use rendered::{DocumentFormat, RenderedDocument};
pub use structured::{DocumentEntry, EntryRole, StructuredDocument};
pub use style::{Alignment, RoleStyle, PageGeometry, GOST_PAGE};
