//! Netlist deck handling: reading, normalization, block extraction.

use std::fs;
use std::path::Path;

use voltaic_core::{GROUND_ALIAS, GROUND_NAME};

use crate::error::{Error, Result};

/// Marker line opening the circuit block.
pub const START_OF_CIRCUIT: &str = ".circuit";

/// Marker line closing the circuit block.
pub const END_OF_CIRCUIT: &str = ".end";

/// Read a netlist file and extract its component lines.
pub fn read_deck(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    component_lines(&text)
}

/// Extract the component lines from netlist text.
///
/// Per line: everything from the first `#` on is a comment, and every
/// literal occurrence of the `GND` alias is rewritten to the canonical
/// ground identifier. The deck must contain exactly one `.circuit` line
/// and exactly one `.end` line, in that order, with at least one
/// component line between them. Component lines are returned in file
/// order; blank lines inside the block are dropped.
pub fn component_lines(text: &str) -> Result<Vec<String>> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            let uncommented = line.split('#').next().unwrap_or("");
            uncommented.replace(GROUND_ALIAS, GROUND_NAME)
        })
        .collect();

    let mut start = None;
    let mut end = None;
    for (i, line) in lines.iter().enumerate() {
        if line == START_OF_CIRCUIT {
            if start.is_some() {
                return Err(Error::DuplicateMarker);
            }
            start = Some(i);
        } else if line == END_OF_CIRCUIT {
            if end.is_some() {
                return Err(Error::DuplicateMarker);
            }
            end = Some(i);
        }
    }
    let start = start.ok_or(Error::MissingMarker(START_OF_CIRCUIT))?;
    let end = end.ok_or(Error::MissingMarker(END_OF_CIRCUIT))?;
    if end < start {
        return Err(Error::MarkerOrder);
    }

    let body: Vec<String> = lines[start + 1..end]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .cloned()
        .collect();
    if body.is_empty() {
        return Err(Error::EmptyCircuit);
    }

    log::debug!("deck: {} component lines in circuit block", body.len());
    Ok(body)
}
