//! # voltaic
//!
//! A DC linear-circuit solver. voltaic parses a netlist of resistors and
//! ideal voltage/current sources, builds a modified-nodal-analysis (MNA)
//! system, solves it with a dense LU factorization, and reports node
//! voltages and voltage-source branch currents.
//!
//! ## Quick start
//!
//! ```
//! let report = voltaic::evaluate_str(
//!     ".circuit\n\
//!      V1 n1 GND dc 10\n\
//!      R1 n1 GND 10\n\
//!      .end\n",
//! )
//! .unwrap();
//!
//! assert_eq!(report.node_voltages["GND"], 0.0);
//! assert!((report.node_voltages["n1"] - 10.0).abs() < 1e-10);
//! assert!((report.source_currents["V1"] + 1.0).abs() < 1e-10);
//! ```
//!
//! The whole pipeline is a pure function of the input text: no state is
//! shared between calls, so independent evaluations may run in parallel.

use std::path::Path;

use thiserror::Error as ThisError;

// Re-export the member crates.
pub use voltaic_core as core;
pub use voltaic_parser as parser;
pub use voltaic_solver as solver;

// Convenient re-exports of the main types.
pub use voltaic_core::{
    Circuit, CurrentSource, ElementRef, NodeId, Resistor, VoltageSource, GROUND_ALIAS, GROUND_NAME,
};
pub use voltaic_core::mna::MnaSystem;
pub use voltaic_parser::{parse_file, parse_str};
pub use voltaic_solver::{solve_op, OpReport, OpSolution};

/// Any failure of the evaluation pipeline.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] voltaic_parser::Error),

    #[error(transparent)]
    Circuit(#[from] voltaic_core::Error),

    #[error(transparent)]
    Solve(#[from] voltaic_solver::Error),
}

/// Coarse failure classification. The kind, not the message text, is
/// the compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file could not be opened or read.
    Resource,
    /// The netlist violates the format: marker structure, element arity,
    /// unknown element kinds, duplicate names, missing ground.
    Format,
    /// A resistor with zero resistance.
    ShortCircuit,
    /// The assembled system has no unique solution.
    Unsolvable,
}

impl Error {
    /// Classify this error into one of the four failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(voltaic_parser::Error::Io { .. }) => ErrorKind::Resource,
            Error::Parse(_) => ErrorKind::Format,
            Error::Circuit(voltaic_core::Error::ShortCircuit(_)) => ErrorKind::ShortCircuit,
            Error::Solve(_) => ErrorKind::Unsolvable,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Evaluate a netlist file: node voltages and voltage-source currents.
///
/// On any failure no partial report is produced; see [`Error::kind`] for
/// the failure classification.
pub fn evaluate(path: impl AsRef<Path>) -> Result<OpReport> {
    let circuit = voltaic_parser::parse_file(path)?;
    solve_circuit(&circuit)
}

/// Evaluate netlist text. Same pipeline as [`evaluate`], minus the file
/// read.
pub fn evaluate_str(text: &str) -> Result<OpReport> {
    let circuit = voltaic_parser::parse_str(text)?;
    solve_circuit(&circuit)
}

/// Assemble, solve and map an already-parsed circuit.
pub fn solve_circuit(circuit: &Circuit) -> Result<OpReport> {
    let mna = circuit.assemble_mna()?;
    let solution = voltaic_solver::solve_op(&mna)?;
    Ok(OpReport::new(circuit, &solution))
}

/// Prelude module containing the commonly used types and entry points.
///
/// ```
/// use voltaic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{evaluate, evaluate_str, solve_circuit};
    pub use crate::{Circuit, Error, ErrorKind, MnaSystem, NodeId, OpReport, OpSolution};
    pub use crate::{CurrentSource, Resistor, VoltageSource};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_str_divider() {
        let report = evaluate_str(
            ".circuit\n\
             V1 n1 GND dc 10\n\
             R1 n1 n2 1k\n\
             R2 n2 GND 1k\n\
             .end\n",
        )
        .unwrap();

        assert!((report.node_voltages["n2"] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_error_kind_classification() {
        let err = evaluate("/no/such/netlist.ckt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);

        let err = evaluate_str("R1 n1 GND 10\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let err = evaluate_str(".circuit\nV1 n1 GND dc 5\nR1 n1 GND 0\n.end\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShortCircuit);
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let _: NodeId = NodeId::GROUND;
        let r = Resistor::new("R1", NodeId::new(1), NodeId::new(2), 1000.0);
        assert_eq!(r.resistance, 1000.0);
    }
}
