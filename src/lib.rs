//! Resolution of the running software's version
//!
//! Looks up the version recorded by `cargo install` for the `agents` package
//! and exposes it as a process-wide constant, substituting `"0.0.0"` when the
//! package has no installation record (e.g., running from uninstalled source).
//!
//! ```
//! let version = agents_version::resolve_version();
//! assert!(!version.is_empty());
//! ```

pub mod config;
pub mod version;

pub use crate::version::resolve_version;
