//! Netlist parsing for voltaic.
//!
//! This crate turns a netlist deck into a [`voltaic_core::Circuit`]:
//! the deck module handles reading, comment stripping, ground-alias
//! normalization and `.circuit`/`.end` block extraction; the elements
//! module classifies each component line.
//!
//! # Example
//!
//! ```
//! use voltaic_parser::parse_str;
//!
//! let circuit = parse_str(
//!     ".circuit\n\
//!      V1 n1 GND dc 10\n\
//!      R1 n1 GND 10\n\
//!      .end\n",
//! )
//! .unwrap();
//!
//! assert_eq!(circuit.num_nodes(), 1);
//! assert_eq!(circuit.voltage_sources().len(), 1);
//! ```

pub mod deck;
pub mod elements;
pub mod error;

use std::path::Path;

use voltaic_core::Circuit;

pub use deck::{END_OF_CIRCUIT, START_OF_CIRCUIT};
pub use error::{Error, Result};

/// Parse a netlist file into a circuit.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Circuit> {
    let lines = deck::read_deck(path)?;
    elements::classify(&lines)
}

/// Parse netlist text into a circuit.
pub fn parse_str(text: &str) -> Result<Circuit> {
    let lines = deck::component_lines(text)?;
    elements::classify(&lines)
}
