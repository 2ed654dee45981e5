pub mod common;
pub mod env;
pub mod error;
pub mod installer;
pub mod layout;
pub mod log;
pub mod runner;
pub mod sandbox;

pub use error::SandboxError;
pub use layout::{PlatformFamily, VenvLayout};
pub use runner::{ExecutionResult, RuntimePaths};
pub use sandbox::Sandbox;
