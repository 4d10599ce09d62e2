use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Package not registered: {0}")]
    NotFound(String),

    #[error("Failed to read install manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed install manifest: {0}")]
    Parse(#[from] toml::de::Error),
}
