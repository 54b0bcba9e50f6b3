mod api_models;
mod api_v0;
mod error;
mod seed_endpoint;
mod seed_export;

#[cfg(test)]
mod mock;

pub use api_models::*;
pub use api_v0::*;
pub use error::*;
pub use seed_endpoint::*;
pub use seed_export::*;
