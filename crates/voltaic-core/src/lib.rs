//! Core circuit representation and MNA matrix structures for voltaic.
//!
//! This crate provides the fundamental data structures for representing a
//! DC circuit (interned nodes, element tables with integer-indexed
//! adjacency) and the Modified Nodal Analysis (MNA) system assembled
//! from them.

pub mod circuit;
pub mod element;
pub mod error;
pub mod mna;
pub mod node;
pub mod units;

pub use circuit::Circuit;
pub use element::{CurrentSource, ElementRef, Resistor, VoltageSource};
pub use error::{Error, Result};
pub use node::{NodeId, GROUND_ALIAS, GROUND_NAME};
