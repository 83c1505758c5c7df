pub mod cache;
pub mod models;
pub mod tasks;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
