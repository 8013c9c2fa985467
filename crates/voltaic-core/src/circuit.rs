//! Circuit graph representation and MNA assembly.

use indexmap::IndexMap;

use crate::element::{CurrentSource, ElementRef, Resistor, VoltageSource};
use crate::error::{Error, Result};
use crate::mna::MnaSystem;
use crate::node::{NodeId, GROUND_NAME};

/// A circuit: interned nodes, element tables, and per-node adjacency.
///
/// Nodes are interned on first reference and addressed by [`NodeId`];
/// ground is interned at construction under [`GROUND_NAME`] and is always
/// `NodeId(0)`. Elements live in per-kind tables and are addressed by
/// [`ElementRef`], so the assembly loop works purely on integer indices.
#[derive(Debug)]
pub struct Circuit {
    /// Map from node name to node ID, in first-reference order.
    nodes: IndexMap<String, NodeId>,
    /// Elements touching each node, indexed by NodeId. Deduplicated,
    /// first-appearance order.
    adjacency: Vec<Vec<ElementRef>>,
    resistors: Vec<Resistor>,
    vsources: Vec<VoltageSource>,
    isources: Vec<CurrentSource>,
}

impl Circuit {
    /// Create a new empty circuit. The ground node is always present.
    pub fn new() -> Self {
        let mut nodes = IndexMap::new();
        nodes.insert(GROUND_NAME.to_string(), NodeId::GROUND);
        Self {
            nodes,
            adjacency: vec![Vec::new()],
            resistors: Vec::new(),
            vsources: Vec::new(),
            isources: Vec::new(),
        }
    }

    /// Look up a node by name, creating it on first reference.
    pub fn intern_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.nodes.get(name) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Get a node's ID by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name).copied()
    }

    /// Iterate over (name, id) pairs in intern order, ground first.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.nodes.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// Get the number of nodes (excluding ground).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Get the resistor table.
    pub fn resistors(&self) -> &[Resistor] {
        &self.resistors
    }

    /// Get the voltage-source table.
    pub fn voltage_sources(&self) -> &[VoltageSource] {
        &self.vsources
    }

    /// Get the current-source table.
    pub fn current_sources(&self) -> &[CurrentSource] {
        &self.isources
    }

    /// Add a resistor and record it against both terminal nodes.
    pub fn add_resistor(&mut self, resistor: Resistor) {
        let eref = ElementRef::Resistor(self.resistors.len());
        self.record(resistor.node_a, eref);
        self.record(resistor.node_b, eref);
        self.resistors.push(resistor);
    }

    /// Add a voltage source and record it against both terminal nodes.
    pub fn add_voltage_source(&mut self, source: VoltageSource) {
        let eref = ElementRef::VoltageSource(self.vsources.len());
        self.record(source.node_pos, eref);
        self.record(source.node_neg, eref);
        self.vsources.push(source);
    }

    /// Add a current source and record it against both terminal nodes.
    pub fn add_current_source(&mut self, source: CurrentSource) {
        let eref = ElementRef::CurrentSource(self.isources.len());
        self.record(source.node_pos, eref);
        self.record(source.node_neg, eref);
        self.isources.push(source);
    }

    /// Record `eref` in `node`'s adjacency list, skipping duplicates so a
    /// degenerate element (both terminals on one node) appears once.
    fn record(&mut self, node: NodeId, eref: ElementRef) {
        let list = &mut self.adjacency[node.as_u32() as usize];
        if !list.contains(&eref) {
            list.push(eref);
        }
    }

    /// Elements touching the given node, in first-appearance order.
    pub fn touching(&self, node: NodeId) -> &[ElementRef] {
        &self.adjacency[node.as_u32() as usize]
    }

    /// Whether any element references the ground node.
    pub fn ground_in_use(&self) -> bool {
        !self.adjacency[0].is_empty()
    }

    /// Index of the k-th voltage source's branch-current unknown.
    ///
    /// Branch unknowns continue the node numbering: the k-th source gets
    /// `num_nodes() + k`.
    pub fn branch_index(&self, k: usize) -> usize {
        self.num_nodes() + k
    }

    /// Total number of unknowns: `(#nodes - 1) + #voltage sources`.
    pub fn size(&self) -> usize {
        self.num_nodes() + self.vsources.len()
    }

    /// Assemble the MNA system: one KCL row per non-ground node, then one
    /// constraint row per voltage source.
    ///
    /// Fails with [`Error::ShortCircuit`] on a zero-valued resistor.
    pub fn assemble_mna(&self) -> Result<MnaSystem> {
        let mut mna = MnaSystem::new(self.num_nodes(), self.vsources.len());

        for &node in self.nodes.values() {
            let row = match node.unknown_index() {
                Some(row) => row,
                None => continue, // ground has no KCL row
            };

            for &eref in self.touching(node) {
                match eref {
                    ElementRef::Resistor(k) => {
                        let r = &self.resistors[k];
                        if r.resistance == 0.0 {
                            return Err(Error::ShortCircuit(r.name.clone()));
                        }
                        let g = r.conductance();
                        for terminal in [r.node_a, r.node_b] {
                            if terminal == node {
                                mna.add(row, row, g);
                            } else if let Some(col) = terminal.unknown_index() {
                                mna.add(row, col, -g);
                            }
                        }
                    }
                    ElementRef::CurrentSource(k) => {
                        let s = &self.isources[k];
                        // Current is drawn from the positive node and
                        // injected into the negative node.
                        if s.node_pos == node {
                            mna.add_rhs(row, -s.value);
                        } else {
                            mna.add_rhs(row, s.value);
                        }
                    }
                    ElementRef::VoltageSource(k) => {
                        let s = &self.vsources[k];
                        let col = self.branch_index(k);
                        if s.node_pos == node {
                            mna.add(row, col, 1.0);
                        } else if s.node_neg == node {
                            mna.add(row, col, -1.0);
                        }
                    }
                }
            }
        }

        for (k, s) in self.vsources.iter().enumerate() {
            let row = self.branch_index(k);
            if let Some(col) = s.node_pos.unknown_index() {
                mna.add(row, col, 1.0);
            }
            if let Some(col) = s.node_neg.unknown_index() {
                mna.add(row, col, -1.0);
            }
            mna.add_rhs(row, s.value);
        }

        log::debug!(
            "assembled MNA system: {} unknowns ({} nodes + {} sources)",
            mna.size(),
            mna.num_nodes,
            mna.num_vsources
        );

        Ok(mna)
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}
