use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while writing or reading a wheel.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("zip error on {}: {}", .path.display(), .source)]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Broken internal import graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("module '{from}' imports '{target}', which is not generated")]
    MissingTarget { from: String, target: String },

    #[error("import cycle through module '{0}'")]
    Cycle(String),
}
