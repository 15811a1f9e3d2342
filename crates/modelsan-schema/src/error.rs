//! Error types for modelsan-schema

use std::path::PathBuf;

/// Result type for modelsan-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or reading a model document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model document {path} near byte {position}: {source}")]
    Xml {
        path: PathBuf,
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Attribute '{attribute}' of entity '{entity}' has no attributeType (near byte {position})")]
    MissingAttributeType {
        entity: String,
        attribute: String,
        position: usize,
    },

    #[error("No model document found in {path}")]
    NoModelDocument { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn xml(path: impl Into<PathBuf>, position: usize, source: quick_xml::Error) -> Self {
        Self::Xml {
            path: path.into(),
            position,
            source,
        }
    }
}
