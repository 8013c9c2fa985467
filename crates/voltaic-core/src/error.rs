//! Error types for voltaic-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("short circuit: resistor {0} has zero resistance")]
    ShortCircuit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
