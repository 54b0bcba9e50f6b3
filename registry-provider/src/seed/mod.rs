mod error;
mod import;
mod reader;

pub use error::SeedError;
pub use import::*;
pub use reader::*;
