//! Span replacement over immutable original text.
//!
//! All spans are computed against the original content before any rewriting,
//! so applying them is a single forward pass that copies unmatched stretches
//! verbatim. No running offset adjustment is needed.

use std::ops::Range;

/// One planned replacement: `span` in the original text becomes `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Byte range in the original content.
    pub span: Range<usize>,
    /// Replacement text for that range.
    pub text: String,
}

/// Apply non-overlapping replacements, ordered left to right, to `original`.
///
/// Spans must be ordered and disjoint; the scanner produces them that way.
pub fn apply_replacements(original: &str, replacements: &[Replacement]) -> String {
    let mut output = String::with_capacity(original.len());
    let mut cursor = 0;

    for replacement in replacements {
        output.push_str(&original[cursor..replacement.span.start]);
        output.push_str(&replacement.text);
        cursor = replacement.span.end;
    }
    output.push_str(&original[cursor..]);

    output
}
