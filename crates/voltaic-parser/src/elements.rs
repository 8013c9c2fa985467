//! Element classification: netlist lines into a typed circuit.

use std::collections::HashSet;

use voltaic_core::units::parse_value;
use voltaic_core::{Circuit, CurrentSource, Resistor, VoltageSource};

use crate::error::{Error, Result};

/// Classify component lines into a [`Circuit`].
///
/// Token 0 of each line is the element name; its first character selects
/// the kind: `R` (4 tokens: name, nodeA, nodeB, value), `V` or `I`
/// (5 tokens: name, nodePos, nodeNeg, sourceType, value). Anything else
/// is rejected. Element names must be unique.
///
/// Elements are inserted in lexicographic name order, so node interning
/// (and with it unknown numbering) is reproducible regardless of line
/// order in the deck.
pub fn classify(lines: &[String]) -> Result<Circuit> {
    let mut elements = Vec::with_capacity(lines.len());
    let mut seen = HashSet::new();

    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let name = match tokens.first() {
            Some(&name) => name,
            None => continue,
        };

        let expected = match name.chars().next() {
            Some('R') => ("resistance", 4),
            Some('V') => ("voltage source", 5),
            Some('I') => ("current source", 5),
            _ => return Err(Error::UnknownElement(line.clone())),
        };
        if tokens.len() != expected.1 {
            return Err(Error::BadArity {
                kind: expected.0,
                line: line.clone(),
            });
        }
        if !seen.insert(name.to_string()) {
            return Err(Error::DuplicateElement(name.to_string()));
        }

        elements.push(tokens);
    }

    // Canonical ordering: lexicographic by (unique) element name.
    elements.sort_by(|a, b| a[0].cmp(b[0]));

    let mut circuit = Circuit::new();
    for tokens in &elements {
        let name = tokens[0];
        match name.chars().next() {
            Some('R') => {
                let node_a = circuit.intern_node(tokens[1]);
                let node_b = circuit.intern_node(tokens[2]);
                let resistance = element_value(name, tokens[3])?;
                circuit.add_resistor(Resistor::new(name, node_a, node_b, resistance));
            }
            Some('V') => {
                let node_pos = circuit.intern_node(tokens[1]);
                let node_neg = circuit.intern_node(tokens[2]);
                let value = element_value(name, tokens[4])?;
                circuit.add_voltage_source(VoltageSource::new(
                    name, node_pos, node_neg, tokens[3], value,
                ));
            }
            Some('I') => {
                let node_pos = circuit.intern_node(tokens[1]);
                let node_neg = circuit.intern_node(tokens[2]);
                let value = element_value(name, tokens[4])?;
                circuit.add_current_source(CurrentSource::new(
                    name, node_pos, node_neg, tokens[3], value,
                ));
            }
            _ => unreachable!("kind validated above"),
        }
    }

    if !circuit.ground_in_use() {
        return Err(Error::NoGround);
    }

    log::debug!(
        "classified {} resistors, {} voltage sources, {} current sources over {} nodes",
        circuit.resistors().len(),
        circuit.voltage_sources().len(),
        circuit.current_sources().len(),
        circuit.num_nodes()
    );

    Ok(circuit)
}

fn element_value(name: &str, token: &str) -> Result<f64> {
    parse_value(token).ok_or_else(|| Error::InvalidValue {
        name: name.to_string(),
        value: token.to_string(),
    })
}
