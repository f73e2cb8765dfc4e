pub mod cli;
pub mod error;
pub mod keys;
pub mod naming;
pub mod operations;

pub use error::{CliError, Result};
pub use keys::{Algorithm, KeyEntry, KeyList, KeyMaterial};
