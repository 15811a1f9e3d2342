//! Directory-level sanitization tests over real temp files

use std::fs;
use std::path::Path;

use modelsan_rewrite::{FileOutcome, Report, sanitize_directory, sanitize_file};
use modelsan_schema::reader::parse_contents;
use modelsan_schema::AttributeTable;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CONTENTS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<model type="com.apple.IDECoreDataModeler.DataModel" documentVersion="1.0">
    <entity name="Person" representedClassName="Person" syncable="YES">
        <attribute name="age" attributeType="Integer 32" defaultValueString="0"/>
        <attribute name="nickname" optional="YES" attributeType="String">
            <userInfo>
                <entry key="customAttributeType" value="Alias"/>
            </userInfo>
        </attribute>
    </entity>
</model>
"#;

fn table() -> AttributeTable {
    parse_contents(CONTENTS, Path::new("contents")).unwrap()
}

const GENERATED: &str = r#"import Foundation
import CoreData

extension Person {
    @NSManaged public var age: Int32?
    @NSManaged public var nickname: String
}
"#;

const SANITIZED: &str = r#"import Foundation
import CoreData

extension Person {
    @NSManaged public var age: Int32
    @NSManaged public var nickname: Alias?
}
"#;

#[test]
fn rewrites_generated_file_to_match_schema() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Person+CoreDataProperties.swift");
    fs::write(&path, GENERATED).unwrap();

    let outcome = sanitize_file(&path, &table()).unwrap();
    assert_eq!(outcome, FileOutcome::Changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), SANITIZED);
}

#[test]
fn second_pass_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Person+CoreDataProperties.swift");
    fs::write(&path, GENERATED).unwrap();

    sanitize_file(&path, &table()).unwrap();
    let outcome = sanitize_file(&path, &table()).unwrap();
    assert_eq!(outcome, FileOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), SANITIZED);
}

#[test]
fn file_for_unknown_entity_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Stranger+CoreDataProperties.swift");
    let body = "@NSManaged public var age: Int32?\n";
    fs::write(&path, body).unwrap();

    let outcome = sanitize_file(&path, &table()).unwrap();
    assert_eq!(outcome, FileOutcome::Skipped);
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
}

#[test]
fn directory_pass_only_touches_suffixed_files() {
    let temp = TempDir::new().unwrap();
    let generated = temp.path().join("Person+CoreDataProperties.swift");
    let unrelated = temp.path().join("Person.swift");
    fs::write(&generated, GENERATED).unwrap();
    fs::write(&unrelated, "@NSManaged public var age: Int32?\n").unwrap();

    let report = sanitize_directory(temp.path(), &table()).unwrap();
    assert_eq!(
        report,
        Report {
            processed: 1,
            skipped: 0,
            changed: 1,
        }
    );
    assert_eq!(fs::read_to_string(&generated).unwrap(), SANITIZED);
    assert_eq!(
        fs::read_to_string(&unrelated).unwrap(),
        "@NSManaged public var age: Int32?\n"
    );
}

#[test]
fn directory_pass_counts_skipped_files() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Person+CoreDataProperties.swift"),
        SANITIZED,
    )
    .unwrap();
    fs::write(
        temp.path().join("Stranger+CoreDataProperties.swift"),
        "var x: Y\n",
    )
    .unwrap();

    let report = sanitize_directory(temp.path(), &table()).unwrap();
    assert_eq!(
        report,
        Report {
            processed: 1,
            skipped: 1,
            changed: 0,
        }
    );
}

#[test]
fn unreadable_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("not-here");
    assert!(sanitize_directory(&missing, &table()).is_err());
}

#[test]
fn already_correct_file_is_still_rewritten() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Person+CoreDataProperties.swift");
    fs::write(&path, SANITIZED).unwrap();

    let before = fs::metadata(&path).unwrap().modified().unwrap();
    let outcome = sanitize_file(&path, &table()).unwrap();
    assert_eq!(outcome, FileOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), SANITIZED);
    // Whole-file overwrite happens even without changes
    let after = fs::metadata(&path).unwrap().modified().unwrap();
    assert!(after >= before);
}
