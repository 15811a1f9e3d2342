//! Lexical scanning of property declarations in generated source text.
//!
//! Recognition is pattern-based, not a Swift parse: only the
//! `var identifier: TypeName` shape the accessor generator emits is matched,
//! with an optional single trailing `?`. Everything else in the file is
//! opaque text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Character appended to a type name to mark it nullable.
pub const OPTIONAL_MARKER: char = '?';

/// Matches one generated property declaration. The `type` group covers the
/// type name and its trailing marker, if any.
static PROPERTY_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*): (?P<type>[A-Za-z_][A-Za-z0-9_]*\??)")
        .expect("Invalid property declaration regex")
});

/// One matched property-declaration span, pending rewrite.
///
/// `span` is the byte range of the type text (marker included) in the
/// original content; the keyword, name, and separator stay untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationMatch {
    /// The declared property name.
    pub name: String,
    /// The type text as written, including any trailing marker.
    pub type_text: String,
    /// Byte range of `type_text` in the scanned content.
    pub span: Range<usize>,
}

impl DeclarationMatch {
    /// Split the type text into its base name and marker flag.
    pub fn base_type(&self) -> (&str, bool) {
        match self.type_text.strip_suffix(OPTIONAL_MARKER) {
            Some(base) => (base, true),
            None => (self.type_text.as_str(), false),
        }
    }
}

/// Scan `content` for property declarations, in document order.
///
/// Matches never overlap; the returned spans index into `content` as scanned,
/// before any rewriting.
pub fn scan(content: &str) -> Vec<DeclarationMatch> {
    PROPERTY_DECL
        .captures_iter(content)
        .map(|caps| {
            let name = &caps["name"];
            let type_match = caps.name("type").expect("type group always captures");
            DeclarationMatch {
                name: name.to_string(),
                type_text: type_match.as_str().to_string(),
                span: type_match.range(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_empty_content() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn scan_single_declaration() {
        let content = "@NSManaged public var age: Int32\n";
        let matches = scan(content);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "age");
        assert_eq!(matches[0].type_text, "Int32");
        assert_eq!(&content[matches[0].span.clone()], "Int32");
    }

    #[test]
    fn scan_captures_trailing_marker() {
        let matches = scan("    @NSManaged public var nickname: String?\n");
        assert_eq!(matches[0].type_text, "String?");
        assert_eq!(matches[0].base_type(), ("String", true));
    }

    #[test]
    fn scan_tolerates_surrounding_code() {
        let content = r#"import Foundation
import CoreData

extension Person {
    @nonobjc public class func fetchRequest() -> NSFetchRequest<Person> {
        return NSFetchRequest<Person>(entityName: "Person")
    }

    @NSManaged public var age: Int32
    @NSManaged public var nickname: String?
}
"#;
        let matches = scan(content);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "age");
        assert_eq!(matches[1].name, "nickname");
        assert!(matches[0].span.end <= matches[1].span.start);
    }

    #[test]
    fn scan_ignores_malformed_declarations() {
        // No space after the colon, or no colon at all.
        let matches = scan("var broken:Int32\nvar lonely\n");
        assert!(matches.is_empty());
    }

    #[test]
    fn base_type_without_marker() {
        let matches = scan("var age: Int32");
        assert_eq!(matches[0].base_type(), ("Int32", false));
    }
}
