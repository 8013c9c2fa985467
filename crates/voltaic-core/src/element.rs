//! Element records: resistors and independent sources.

use crate::NodeId;

/// A resistor element.
#[derive(Debug, Clone)]
pub struct Resistor {
    /// Element name (e.g., "R1").
    pub name: String,
    /// First terminal node.
    pub node_a: NodeId,
    /// Second terminal node.
    pub node_b: NodeId,
    /// Resistance value in ohms.
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(name: impl Into<String>, node_a: NodeId, node_b: NodeId, resistance: f64) -> Self {
        Self {
            name: name.into(),
            node_a,
            node_b,
            resistance,
        }
    }

    /// Get the conductance (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

/// An independent voltage source.
///
/// Fixes the voltage between its terminals; the current through it is an
/// extra MNA unknown.
#[derive(Debug, Clone)]
pub struct VoltageSource {
    /// Element name (e.g., "V1").
    pub name: String,
    /// Positive terminal node.
    pub node_pos: NodeId,
    /// Negative terminal node.
    pub node_neg: NodeId,
    /// Source type token from the netlist (e.g., "dc"). Kept verbatim,
    /// never interpreted.
    pub source_type: String,
    /// DC voltage value in volts.
    pub value: f64,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        source_type: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos,
            node_neg,
            source_type: source_type.into(),
            value,
        }
    }
}

/// An independent current source.
///
/// Current `value` flows through the source from `node_pos` to `node_neg`:
/// it is drawn from the positive node and injected into the negative node.
#[derive(Debug, Clone)]
pub struct CurrentSource {
    /// Element name (e.g., "I1").
    pub name: String,
    /// Positive terminal node (current flows out of this node).
    pub node_pos: NodeId,
    /// Negative terminal node (current flows into this node).
    pub node_neg: NodeId,
    /// Source type token from the netlist (e.g., "dc"). Kept verbatim,
    /// never interpreted.
    pub source_type: String,
    /// DC current value in amperes.
    pub value: f64,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        source_type: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_pos,
            node_neg,
            source_type: source_type.into(),
            value,
        }
    }
}

/// A copyable reference to an element stored in the circuit's tables.
///
/// The variant tags the kind; the payload indexes the per-kind `Vec`.
/// Adjacency lists hold these instead of element names so equation
/// assembly never performs string lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef {
    /// Index into the resistor table.
    Resistor(usize),
    /// Index into the voltage-source table.
    VoltageSource(usize),
    /// Index into the current-source table.
    CurrentSource(usize),
}
