//! Runtime environment builder: disposable Python venvs.
//!
//! Callers own the target directory (usually a `TempDir`); this module creates the
//! venv inside it and returns `RuntimePaths`. Removal is the caller's scope.

pub mod builder;
