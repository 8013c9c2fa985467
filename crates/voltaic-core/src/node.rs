//! Node representation for circuit graphs.

use std::fmt;

/// Canonical identifier for the ground node inside a netlist deck.
///
/// The parser rewrites the `GND` alias to this token before any other
/// processing, so downstream code only ever sees `n0`.
pub const GROUND_NAME: &str = "n0";

/// Display alias for the ground node, used in reports and output tables.
pub const GROUND_ALIAS: &str = "GND";

/// Unique identifier for a node in the circuit.
///
/// NodeIds are dense indices into the circuit's node table; ground is
/// always index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The ground node (node 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw node ID value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Check if this is the ground node.
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }

    /// Index of this node's voltage unknown in the MNA system.
    ///
    /// Ground has no unknown; every other node's column is its table
    /// index minus one.
    pub fn unknown_index(self) -> Option<usize> {
        if self.is_ground() {
            None
        } else {
            Some((self.0 - 1) as usize)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "{}", GROUND_ALIAS)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
