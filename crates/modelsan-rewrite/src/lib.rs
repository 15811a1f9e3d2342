//! Generated accessor rewriting for modelsan.
//!
//! Consumes the read-only [`AttributeTable`](modelsan_schema::AttributeTable)
//! built by `modelsan-schema` and reconciles generated accessor files with
//! it: the `scan` module finds property-declaration spans, `rewrite` applies
//! planned span replacements over the original text, and `sanitizer` drives
//! the per-file and per-directory passes with atomic writes from `io`.

pub mod error;
pub mod io;
pub mod rewrite;
pub mod sanitizer;
pub mod scan;

pub use error::{Error, Result};
pub use rewrite::{Replacement, apply_replacements};
pub use sanitizer::{
    FileOutcome, GENERATED_SUFFIX, Report, sanitize_directory, sanitize_file, sanitize_source,
};
pub use scan::{DeclarationMatch, OPTIONAL_MARKER, scan};
