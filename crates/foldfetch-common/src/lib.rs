//! foldfetch-common: shared error type and HTTP client used across all foldfetch crates.

pub mod error;
pub mod sandbox;

pub use error::{FoldError, Result};
pub use sandbox::SandboxClient;
