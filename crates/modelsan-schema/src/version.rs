//! Resolution of the active model version inside an `.xcdatamodeld` bundle.
//!
//! A versioned bundle carries a `.xccurrentversion` plist naming the active
//! `.xcdatamodel` sub-directory. Unversioned bundles have no plist and a
//! single sub-directory; those fall back to whatever `.xcdatamodel` entry the
//! directory listing yields first.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::{Error, Result};

/// Plist naming the active version, directly inside the bundle.
pub const CURRENT_VERSION_FILE: &str = ".xccurrentversion";

/// Plist key whose string value is the active version's directory name.
pub const CURRENT_VERSION_KEY: &str = "_XCCurrentVersionName";

/// Extension of version sub-directories inside the bundle.
pub const MODEL_EXTENSION: &str = "xcdatamodel";

/// Name of the schema document inside a version sub-directory.
pub const CONTENTS_FILE: &str = "contents";

/// Resolve the path of the active schema document inside `model_dir`.
///
/// Prefers the version named by `.xccurrentversion`; an absent or unreadable
/// plist falls back to the first `.xcdatamodel` entry found in the bundle.
/// Fails with [`Error::NoModelDocument`] when neither route yields an
/// existing `contents` file.
pub fn resolve_document(model_dir: &Path) -> Result<PathBuf> {
    let document = match current_version_name(model_dir) {
        Some(version) => model_dir.join(version).join(CONTENTS_FILE),
        None => fallback_document(model_dir)?,
    };

    if document.is_file() {
        tracing::debug!(document = %document.display(), "resolved model document");
        Ok(document)
    } else {
        Err(Error::NoModelDocument {
            path: model_dir.to_path_buf(),
        })
    }
}

/// Read the active version name from the bundle's plist, if any.
///
/// Any failure here (missing file, malformed plist, key absent) selects the
/// fallback path rather than aborting the run.
fn current_version_name(model_dir: &Path) -> Option<String> {
    let plist_path = model_dir.join(CURRENT_VERSION_FILE);
    let xml = fs::read_to_string(&plist_path).ok()?;
    let version = parse_current_version(&xml);
    if version.is_none() {
        tracing::debug!(path = %plist_path.display(), "no usable current-version entry");
    }
    version
}

/// Extract the `_XCCurrentVersionName` string from a plist dict.
fn parse_current_version(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut in_key = false;
    let mut in_string = false;
    let mut key_matched = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"key" => in_key = true,
                b"string" => in_string = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"key" => in_key = false,
                b"string" => in_string = false,
                _ => {}
            },
            Ok(Event::Text(t)) => {
                let text = t.unescape().ok()?;
                if in_key {
                    key_matched = text.as_ref() == CURRENT_VERSION_KEY;
                } else if in_string && key_matched {
                    return Some(text.into_owned());
                }
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// Pick an arbitrary `.xcdatamodel` entry from the bundle.
///
/// Directory-listing order is not guaranteed by the filesystem; with multiple
/// versions and no plist, whichever entry is listed first wins.
fn fallback_document(model_dir: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(model_dir).map_err(|e| Error::io(model_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(model_dir, e))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == MODEL_EXTENSION) {
            return Ok(path.join(CONTENTS_FILE));
        }
    }
    Err(Error::NoModelDocument {
        path: model_dir.to_path_buf(),
    })
}
