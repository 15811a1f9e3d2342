//! Reconciling generated accessor files with the attribute table.
//!
//! A generated file owns one entity, named by the portion of the filename
//! before the `+` delimiter (`Person+CoreDataProperties.swift` → `Person`).
//! Each scanned declaration is looked up in that entity's attribute map and
//! its type text rewritten to the schema's custom type and optionality.
//! Lookup misses leave the declaration untouched; files outside the schema's
//! entity set are skipped entirely.

use std::fs;
use std::path::Path;

use modelsan_schema::{AttributeTable, Entity};

use crate::io::{read_text, write_atomic};
use crate::rewrite::{Replacement, apply_replacements};
use crate::scan::{OPTIONAL_MARKER, scan};
use crate::{Error, Result};

/// Filename suffix marking a generated accessor file.
pub const GENERATED_SUFFIX: &str = "+CoreDataProperties.swift";

/// Delimiter separating the entity name from the rest of the filename.
const ENTITY_DELIMITER: char = '+';

/// What happened to one processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// File was rewritten with modified declarations.
    Changed,
    /// File was rewritten byte-identical (already matched the schema).
    Unchanged,
    /// File's derived entity has no table entry; nothing was touched.
    Skipped,
}

/// Counts for one directory pass, reported on the success line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Files matched to an entity and rewritten.
    pub processed: usize,
    /// Files with the generated suffix but no entity in the table.
    pub skipped: usize,
    /// Subset of `processed` whose content actually changed.
    pub changed: usize,
}

/// Derive the owning entity's name from a generated file's base name.
///
/// Returns `None` when the delimiter is absent or nothing precedes it.
pub fn entity_for_file(file_name: &str) -> Option<&str> {
    match file_name.split_once(ENTITY_DELIMITER) {
        Some(("", _)) | None => None,
        Some((entity, _)) => Some(entity),
    }
}

/// Rewrite every matched declaration in `content` to agree with `entity`.
///
/// Pure text transform; idempotent. Declarations whose attribute is not in
/// the entity's map pass through unchanged.
pub fn sanitize_source(content: &str, entity: &Entity) -> String {
    let mut replacements = Vec::new();

    for decl in scan(content) {
        let Some(attribute) = entity.attribute(&decl.name) else {
            continue;
        };

        let (base, _) = decl.base_type();
        let base = attribute.custom_type().unwrap_or(base);

        let mut text = String::from(base);
        if attribute.is_optional() {
            text.push(OPTIONAL_MARKER);
        }

        // Already-correct spans produce no replacement entry, which is what
        // makes repeated runs byte-identical.
        if text != decl.type_text {
            replacements.push(Replacement {
                span: decl.span,
                text,
            });
        }
    }

    apply_replacements(content, &replacements)
}

/// Sanitize one generated file in place.
pub fn sanitize_file(path: &Path, table: &AttributeTable) -> Result<FileOutcome> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let entity = entity_for_file(&file_name).and_then(|name| table.entity(name));

    let Some(entity) = entity else {
        // Valid for a directory to hold files outside the schema's entity set
        tracing::debug!(file = %path.display(), "no entity for file, skipping");
        return Ok(FileOutcome::Skipped);
    };

    let original = read_text(path)?;
    let sanitized = sanitize_source(&original, entity);
    let outcome = if sanitized == original {
        FileOutcome::Unchanged
    } else {
        FileOutcome::Changed
    };

    // The whole file is rewritten even when nothing changed
    write_atomic(path, sanitized.as_bytes())?;
    tracing::debug!(file = %path.display(), changed = matches!(outcome, FileOutcome::Changed), "file sanitized");

    Ok(outcome)
}

/// Sanitize every generated accessor file directly inside `target_dir`.
///
/// The first I/O failure aborts the pass; files rewritten before it stand.
pub fn sanitize_directory(target_dir: &Path, table: &AttributeTable) -> Result<Report> {
    let mut report = Report::default();

    let entries = fs::read_dir(target_dir).map_err(|e| Error::io(target_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(target_dir, e))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(GENERATED_SUFFIX) {
            continue;
        }

        match sanitize_file(&entry.path(), table)? {
            FileOutcome::Changed => {
                report.processed += 1;
                report.changed += 1;
            }
            FileOutcome::Unchanged => report.processed += 1,
            FileOutcome::Skipped => report.skipped += 1,
        }
    }

    Ok(report)
}
