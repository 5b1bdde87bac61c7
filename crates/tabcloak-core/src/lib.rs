pub mod csv;
pub mod data;
mod error;
pub mod schema;

pub use error::CoreError;
