//! Core Data model parsing for modelsan.
//!
//! Resolves the active version inside an `.xcdatamodeld` bundle and walks its
//! `contents` document into an [`AttributeTable`]: per entity, each attribute's
//! name, declared type, optional custom type override, and optionality. The
//! table is built once per run and consumed read-only by `modelsan-rewrite`.

pub mod error;
pub mod model;
pub mod reader;
pub mod version;

pub use error::{Error, Result};
pub use model::{Attribute, AttributeTable, Entity};
pub use reader::read_model;
