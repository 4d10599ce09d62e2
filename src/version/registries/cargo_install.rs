//! Cargo install registry backed by the `.crates.toml` manifest

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::config;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Registry of packages installed through `cargo install`
pub struct CargoInstallRegistry {
    manifest_path: PathBuf,
}

impl Default for CargoInstallRegistry {
    fn default() -> Self {
        Self::new(config::install_manifest_path())
    }
}

impl CargoInstallRegistry {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }
}

/// `.crates.toml` manifest structure
#[derive(Debug, Deserialize)]
struct InstallManifest {
    /// Keys are `"name version (source)"` strings; values are the installed
    /// binary names, which the lookup never consumes.
    #[serde(default)]
    v1: BTreeMap<String, Vec<String>>,
}

/// Splits a manifest key into its package name and version fields.
///
/// Returns `None` for keys that do not carry both fields.
fn split_manifest_key(key: &str) -> Option<(&str, &str)> {
    let mut fields = key.splitn(3, ' ');
    let name = fields.next()?;
    let version = fields.next()?;
    Some((name, version))
}

impl Registry for CargoInstallRegistry {
    fn installed_version(&self, package_name: &str) -> Result<String, RegistryError> {
        debug!("Reading install manifest at {:?}", self.manifest_path);

        let raw = match std::fs::read_to_string(&self.manifest_path) {
            Ok(raw) => raw,
            // A missing manifest means nothing was ever installed
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(RegistryError::NotFound(package_name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let manifest: InstallManifest = toml::from_str(&raw)?;

        for key in manifest.v1.keys() {
            if let Some((name, version)) = split_manifest_key(key)
                && name == package_name
            {
                debug!("Found install record: {} {}", name, version);
                return Ok(version.to_string());
            }
        }

        Err(RegistryError::NotFound(package_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "agents 2.3.1 (registry+https://github.com/rust-lang/crates.io-index)",
        Some(("agents", "2.3.1"))
    )]
    #[case("agents 2.3.1", Some(("agents", "2.3.1")))]
    #[case("agents  (path+file:///work/agents)", Some(("agents", "")))]
    #[case("agents", None)]
    #[case("", None)]
    fn split_manifest_key_cases(#[case] key: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_manifest_key(key), expected);
    }
}
