//! Version resolution layer
//!
//! Resolves the running software's version from the host environment's
//! package-installation registry, falling back to a placeholder when the
//! package has no installation record.
//!
//! # Modules
//!
//! - [`error`]: Error types for registry lookups
//! - [`registry`]: Registry trait for querying installed package versions
//! - [`registries`]: Concrete registry implementations (Cargo install manifest)
//! - [`resolver`]: Value-or-fallback resolution policy

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;

use std::sync::OnceLock;

use tracing::warn;

use crate::config;
use crate::version::registries::CargoInstallRegistry;

static RESOLVED: OnceLock<String> = OnceLock::new();

/// Returns the version of the running software.
///
/// Resolved at most once per process: the version recorded in the install
/// registry for the `agents` package, or `"0.0.0"` when no record exists.
/// The value never changes for the process lifetime.
pub fn resolve_version() -> &'static str {
    RESOLVED.get_or_init(|| {
        let registry = CargoInstallRegistry::default();
        resolver::resolve(&registry, config::PACKAGE_NAME).unwrap_or_else(|err| {
            warn!("Failed to read install registry: {err}");
            config::FALLBACK_VERSION.to_string()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_version_is_idempotent() {
        let first = resolve_version();
        let second = resolve_version();

        assert_eq!(first, second);
    }

    #[test]
    fn resolve_version_is_non_empty() {
        assert!(!resolve_version().is_empty());
    }
}
