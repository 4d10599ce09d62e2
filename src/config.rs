use std::path::PathBuf;

/// Package identifier whose installed version this crate resolves.
pub const PACKAGE_NAME: &str = "agents";

/// Placeholder version reported when the package has no installation record.
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Returns the path to Cargo's install manifest.
/// Uses $CARGO_HOME/.crates.toml if CARGO_HOME is set,
/// otherwise falls back to ~/.cargo/.crates.toml,
/// or ./.crates.toml if neither is available.
pub fn install_manifest_path() -> PathBuf {
    install_manifest_path_with_env(std::env::var("CARGO_HOME").ok(), dirs::home_dir())
}

fn install_manifest_path_with_env(
    cargo_home: Option<String>,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    let cargo_dir = cargo_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cargo")))
        .unwrap_or_else(|| PathBuf::from("."));

    cargo_dir.join(".crates.toml")
}
