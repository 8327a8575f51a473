// Crate root library declaration and module exports.
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod sync;

pub use error::{Error, Result};
