use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, Serialize, Deserialize)]
pub enum RegistryError {
    #[error("Server[{0}] not found")]
    NotFound(String),

    #[error("Server[{0}] already exists")]
    ServerIdExists(String),

    #[error("Invalid cursor `{0}`")]
    InvalidCursor(String),

    #[error("{0}")]
    ExternalStorageError(String),
}
