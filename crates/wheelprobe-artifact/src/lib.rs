//! Synthetic wheel generation.
//!
//! `content` renders the Python sources for an [`ArtifactSpec`]; `wheel` packs
//! them with a `.dist-info` directory into a `py3-none-any` wheel.

pub mod content;
pub mod error;
pub mod model;
pub mod wheel;

pub use content::{check_graph, generate_modules, ModuleFile};
pub use error::{ArtifactError, GraphError};
pub use model::ArtifactSpec;
pub use wheel::{build_wheel, plan_entries, read_entries, ArchiveEntry};
