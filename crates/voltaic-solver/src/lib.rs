//! Linear solving and operating-point results for voltaic.
//!
//! Solves the MNA system assembled by `voltaic-core` with a dense LU
//! factorization and maps the solution vector back onto node and source
//! names.

pub mod error;
pub mod linear;
pub mod op;

pub use error::{Error, Result};
pub use linear::solve_dense;
pub use op::{solve_op, OpReport, OpSolution};
