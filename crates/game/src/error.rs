use std::path::PathBuf;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum TickError {
    #[error("invalid timestep: {0}")]
    InvalidTimestep(f64),
    #[error("entity `{name}` is already borrowed")]
    EntityBusy { name: String },
    #[error("entity `{name}` failed to update: {source}")]
    Entity {
        name: String,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("entity not found: {0}")]
    NotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Tick(#[from] TickError),
}
