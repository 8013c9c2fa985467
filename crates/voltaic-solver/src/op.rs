//! DC operating-point solution and result mapping.

use indexmap::IndexMap;
use nalgebra::DVector;

use voltaic_core::mna::MnaSystem;
use voltaic_core::{Circuit, NodeId, GROUND_ALIAS};

use crate::error::Result;
use crate::linear::solve_dense;

/// Result of a DC operating-point solve, indexed by unknown.
#[derive(Debug, Clone)]
pub struct OpSolution {
    /// Node voltages (indexed by node unknown; ground is implicit 0V).
    pub node_voltages: DVector<f64>,
    /// Branch currents through the voltage sources.
    pub branch_currents: DVector<f64>,
    /// Number of nodes (excluding ground).
    pub num_nodes: usize,
}

impl OpSolution {
    /// Get the voltage at a node. Ground is always 0V.
    pub fn voltage(&self, node: NodeId) -> f64 {
        match node.unknown_index() {
            Some(idx) if idx < self.num_nodes => self.node_voltages[idx],
            _ => 0.0,
        }
    }

    /// Get the branch current of the k-th voltage source.
    pub fn current(&self, index: usize) -> f64 {
        if index < self.branch_currents.len() {
            self.branch_currents[index]
        } else {
            0.0
        }
    }
}

/// Solve the DC operating point for an assembled MNA system.
pub fn solve_op(mna: &MnaSystem) -> Result<OpSolution> {
    let solution = solve_dense(mna.matrix(), mna.rhs())?;

    let num_nodes = mna.num_nodes;
    let num_vsources = mna.num_vsources;

    let node_voltages = DVector::from_iterator(num_nodes, solution.iter().take(num_nodes).copied());
    let branch_currents =
        DVector::from_iterator(num_vsources, solution.iter().skip(num_nodes).copied());

    log::debug!(
        "solved operating point: {} node voltages, {} branch currents",
        num_nodes,
        num_vsources
    );

    Ok(OpSolution {
        node_voltages,
        branch_currents,
        num_nodes,
    })
}

/// Name-keyed operating-point results.
///
/// Node voltages are keyed by netlist node name with ground reported
/// under its display alias; source currents are keyed by voltage-source
/// name. Entries follow the circuit's intern order.
#[derive(Debug, Clone)]
pub struct OpReport {
    /// Node name → voltage. Ground is always present, always 0.0.
    pub node_voltages: IndexMap<String, f64>,
    /// Voltage-source name → branch current.
    pub source_currents: IndexMap<String, f64>,
}

impl OpReport {
    /// Map a solution back onto the circuit's node and source names.
    pub fn new(circuit: &Circuit, solution: &OpSolution) -> Self {
        let mut node_voltages = IndexMap::new();
        for (name, id) in circuit.nodes() {
            if id.is_ground() {
                node_voltages.insert(GROUND_ALIAS.to_string(), 0.0);
            } else {
                node_voltages.insert(name.to_string(), solution.voltage(id));
            }
        }

        let mut source_currents = IndexMap::new();
        for (k, source) in circuit.voltage_sources().iter().enumerate() {
            source_currents.insert(source.name.clone(), solution.current(k));
        }

        Self {
            node_voltages,
            source_currents,
        }
    }
}
