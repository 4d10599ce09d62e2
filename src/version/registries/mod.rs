//! Registry implementations for looking up installed package versions

pub mod cargo_install;

pub use cargo_install::CargoInstallRegistry;
