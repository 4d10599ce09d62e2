//! Registry trait for looking up installed package versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for querying the host environment's package-installation registry
#[cfg_attr(test, automock)]
pub trait Registry: Send + Sync {
    /// Looks up the version recorded for an installed package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "agents")
    ///
    /// # Returns
    /// * `Ok(String)` - The recorded version, verbatim
    /// * `Err(RegistryError::NotFound)` - If the package has no installation record
    /// * `Err(RegistryError)` - If the registry itself cannot be read
    fn installed_version(&self, package_name: &str) -> Result<String, RegistryError>;
}
