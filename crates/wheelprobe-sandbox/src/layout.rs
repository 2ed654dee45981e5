//! Where a venv keeps its interpreter and pip.
//!
//! The only platform-dependent part of the harness; everything else asks
//! [`VenvLayout::for_host`] and stays platform-agnostic.

use std::path::{Path, PathBuf};

/// Host platform family as far as venv layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    Unix,
}

impl PlatformFamily {
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Relative executable locations inside a venv root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenvLayout {
    pub bin_dir: &'static str,
    pub python: &'static str,
    pub pip: &'static str,
}

impl VenvLayout {
    pub const WINDOWS: Self = Self {
        bin_dir: "Scripts",
        python: "python.exe",
        pip: "pip.exe",
    };

    pub const UNIX: Self = Self {
        bin_dir: "bin",
        python: "python",
        pip: "pip",
    };

    pub fn for_family(family: PlatformFamily) -> Self {
        match family {
            PlatformFamily::Windows => Self::WINDOWS,
            PlatformFamily::Unix => Self::UNIX,
        }
    }

    pub fn for_host() -> Self {
        Self::for_family(PlatformFamily::host())
    }

    pub fn python_in(&self, env_dir: &Path) -> PathBuf {
        env_dir.join(self.bin_dir).join(self.python)
    }

    pub fn pip_in(&self, env_dir: &Path) -> PathBuf {
        env_dir.join(self.bin_dir).join(self.pip)
    }
}
