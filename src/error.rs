// File: ./src/error.rs
//! Error kinds surfaced by the library.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sub-list (or tier) referenced by the run is missing from fetched remote data.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// Transport, authentication or decoding failure from the board service.
    #[error("remote error: {0}")]
    Remote(String),

    /// Missing or invalid board/credential configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::Lookup(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
