//! Error types for voltaic-parser.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read netlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing {0} marker")]
    MissingMarker(&'static str),

    #[error("netlist has too many start/end markers")]
    DuplicateMarker,

    #[error("end marker appears before the start marker")]
    MarkerOrder,

    #[error("no component found in the netlist")]
    EmptyCircuit,

    #[error("invalidly specified {kind} element: {line}")]
    BadArity { kind: &'static str, line: String },

    #[error("only V, I, R elements are permitted: {0}")]
    UnknownElement(String),

    #[error("invalid value for element {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("duplicate element name: {0}")]
    DuplicateElement(String),

    #[error("no GND node found")]
    NoGround,
}

pub type Result<T> = std::result::Result<T, Error>;
