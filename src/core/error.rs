use thiserror::Error;

#[derive(Error, Debug)]
pub enum VillageError {
    #[error("An inhabitant named {0} already exists")]
    DuplicateName(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VillageError>;
