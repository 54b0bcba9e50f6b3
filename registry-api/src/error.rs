use common_utils::Logged;
use log::error;
use poem::{error::ResponseError, http::StatusCode};
use registry_provider::RegistryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Server('{0}') is not found")]
    NotFoundError(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalError(String),
}

impl ResponseError for ApiError {
    fn status(&self) -> poem::http::StatusCode {
        match &self {
            ApiError::NotFoundError(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(id) => ApiError::NotFoundError(id),
            RegistryError::ServerIdExists(_) => ApiError::Conflict(e.to_string()),
            RegistryError::InvalidCursor(_) => ApiError::BadRequest(e.to_string()),
            // Storage details stay in the log
            RegistryError::ExternalStorageError(msg) => {
                error!("Registry storage error: {}", msg);
                ApiError::InternalError("Internal server error".to_string())
            }
        }
    }
}

pub trait IntoApiResult<T> {
    fn map_api_error(self) -> Result<T, ApiError>;
}

impl<T> IntoApiResult<T> for Result<T, RegistryError> {
    fn map_api_error(self) -> Result<T, ApiError> {
        self.log().map_err(|e| e.into())
    }
}
