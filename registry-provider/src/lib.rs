mod error;
mod models;
mod seed;
mod service;

pub use error::RegistryError;
pub use models::*;
pub use seed::*;
pub use service::*;
