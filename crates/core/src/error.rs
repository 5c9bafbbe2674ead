//! Error types for core catalog parsing

use thiserror::Error;

/// Core errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown tier label: {0}")]
    UnknownTier(String),

    #[error("Unknown series label: {0}")]
    UnknownSeries(String),

    #[error("Unknown door type label: {0}")]
    UnknownDoorType(String),

    #[error("Unknown enclosure label: {0}")]
    UnknownEnclosure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
