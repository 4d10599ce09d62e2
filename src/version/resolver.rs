//! Value-or-fallback resolution policy
//!
//! Converts the registry's "package not registered" signal into the fallback
//! sentinel version. Only that condition is absorbed; any other registry
//! failure propagates to the caller.

use tracing::debug;

use crate::config::FALLBACK_VERSION;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Resolves the installed version for a package
///
/// # Arguments
/// * `registry` - The installation registry to query
/// * `package_name` - The name of the package (e.g., "agents")
///
/// # Returns
/// * `Ok(String)` - The recorded version verbatim, or `"0.0.0"` when the
///   package has no installation record
/// * `Err(RegistryError)` - If the registry itself cannot be read
pub fn resolve(registry: &dyn Registry, package_name: &str) -> Result<String, RegistryError> {
    match registry.installed_version(package_name) {
        Ok(version) => Ok(version),
        Err(RegistryError::NotFound(name)) => {
            debug!("No install record for {}, using fallback version", name);
            Ok(FALLBACK_VERSION.to_string())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::registry::MockRegistry;

    #[test]
    fn resolve_returns_recorded_version_verbatim() {
        let mut registry = MockRegistry::new();
        registry
            .expect_installed_version()
            .returning(|_| Ok("2.3.1".to_string()));

        assert_eq!(resolve(&registry, "agents").unwrap(), "2.3.1");
    }

    #[test]
    fn resolve_substitutes_fallback_when_not_registered() {
        let mut registry = MockRegistry::new();
        registry
            .expect_installed_version()
            .returning(|name| Err(RegistryError::NotFound(name.to_string())));

        assert_eq!(resolve(&registry, "agents").unwrap(), "0.0.0");
    }

    #[test]
    fn resolve_keeps_empty_recorded_version() {
        let mut registry = MockRegistry::new();
        registry
            .expect_installed_version()
            .returning(|_| Ok(String::new()));

        // An empty-but-present record is not the same as an absent one
        assert_eq!(resolve(&registry, "agents").unwrap(), "");
    }

    #[test]
    fn resolve_propagates_read_failures() {
        let mut registry = MockRegistry::new();
        registry.expect_installed_version().returning(|_| {
            Err(RegistryError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )))
        });

        assert!(matches!(
            resolve(&registry, "agents"),
            Err(RegistryError::Io(_))
        ));
    }
}
