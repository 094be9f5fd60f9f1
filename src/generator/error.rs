//! Error taxonomy for the component tree generator.
//!
//! Three tiers, matching how failures propagate:
//! - classification-soft: swallowed by [`crate::generator::classify::is_component`],
//!   never surfaced to callers
//! - resolution-hard: wrapped with the offending path and aborts the run
//! - fatal: an invalid root component, surfaced to the CLI as a non-zero exit

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("cannot get a default export from a module with no export default statement")]
    NoDefaultExport,

    #[error("default export does not resolve to a component declaration")]
    UnresolvedDeclaration,

    #[error("expected exactly one render method in component class")]
    AmbiguousRenderMethod,

    #[error("expected a pure component to take 0 or 1 parameters")]
    InvalidComponentSignature,

    #[error("expected a single declarator bound to a function expression")]
    InvalidVariableComponent,

    #[error("expected component render block to directly return a JSX element")]
    NonJsxReturn,

    #[error("cannot recognize {path} as a component")]
    InvalidRootComponent { path: PathBuf },

    #[error("error reading source directory {path}: {source}")]
    SourceScan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize component tree")]
    Serialize(#[from] serde_json::Error),

    #[error("error parsing component at {path}")]
    Component {
        path: PathBuf,
        #[source]
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Wrap a failure that happened while building the tree for a file
    /// already classified as a component.
    pub fn for_component(path: &std::path::Path, source: GeneratorError) -> Self {
        Self::Component {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }
}
