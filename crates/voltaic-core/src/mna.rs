//! Modified Nodal Analysis (MNA) matrix structures.

use nalgebra::{DMatrix, DVector};

/// MNA system: Ax = b
/// Where A is the coefficient matrix, x is the solution vector (node
/// voltages followed by voltage-source branch currents), and b is the
/// constant vector.
///
/// Each row is owned by exactly one unknown: rows `0..num_nodes` are the
/// KCL equations of the non-ground nodes, rows `num_nodes..` the
/// voltage-source constraint equations.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    /// Number of nodes (excluding ground).
    pub num_nodes: usize,
    /// Number of voltage sources (branch-current unknowns).
    pub num_vsources: usize,
}

impl MnaSystem {
    /// Create a new zeroed MNA system with the given dimensions.
    ///
    /// # Arguments
    /// * `num_nodes` - Number of nodes excluding ground
    /// * `num_vsources` - Number of voltage sources
    pub fn new(num_nodes: usize, num_vsources: usize) -> Self {
        let size = num_nodes + num_vsources;
        Self {
            matrix: DMatrix::zeros(size, size),
            rhs: DVector::zeros(size),
            num_nodes,
            num_vsources,
        }
    }

    /// Get the total size of the system (nodes + branch currents).
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_vsources
    }

    /// Accumulate a coefficient at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.matrix[(row, col)] += value;
    }

    /// Accumulate a value into the constant vector at `row`.
    pub fn add_rhs(&mut self, row: usize, value: f64) {
        self.rhs[row] += value;
    }

    /// Get a reference to the coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Get a reference to the constant vector.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_system() {
        let sys = MnaSystem::new(3, 1);
        assert_eq!(sys.size(), 4);
        assert_eq!(sys.num_nodes, 3);
        assert_eq!(sys.num_vsources, 1);
        assert_eq!(sys.matrix().nrows(), 4);
        assert_eq!(sys.matrix().ncols(), 4);
        assert_eq!(sys.rhs().len(), 4);
    }

    #[test]
    fn test_add_accumulates() {
        let mut sys = MnaSystem::new(2, 0);
        sys.add(0, 1, 0.5);
        sys.add(0, 1, 0.25);
        assert!((sys.matrix()[(0, 1)] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_add_rhs_accumulates() {
        let mut sys = MnaSystem::new(1, 1);
        sys.add_rhs(1, 5.0);
        sys.add_rhs(1, -2.0);
        assert!((sys.rhs()[1] - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_initialized() {
        let sys = MnaSystem::new(2, 1);
        assert!(sys.matrix().iter().all(|&v| v == 0.0));
        assert!(sys.rhs().iter().all(|&v| v == 0.0));
    }
}
