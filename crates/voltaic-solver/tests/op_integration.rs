//! Integration tests for operating-point analysis.

use voltaic_core::{Circuit, CurrentSource, NodeId, Resistor, VoltageSource};
use voltaic_solver::{solve_op, Error, OpReport};

/// Voltage divider:
///
/// ```text
///        V1 = 10V
///          +
///          |
///        node1
///          |
///         R1 = 1k
///          |
///        node2
///          |
///         R2 = 1k
///          |
///         GND
/// ```
///
/// Expected: V(node1) = 10V, V(node2) = 5V
#[test]
fn test_voltage_divider() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");
    let n2 = circuit.intern_node("n2");

    circuit.add_resistor(Resistor::new("R1", n1, n2, 1000.0));
    circuit.add_resistor(Resistor::new("R2", n2, NodeId::GROUND, 1000.0));
    circuit.add_voltage_source(VoltageSource::new("V1", n1, NodeId::GROUND, "dc", 10.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let solution = solve_op(&mna).expect("solve should succeed");

    assert!(
        (solution.voltage(n1) - 10.0).abs() < 1e-10,
        "V(node1) = {} (expected 10.0)",
        solution.voltage(n1)
    );
    assert!(
        (solution.voltage(n2) - 5.0).abs() < 1e-10,
        "V(node2) = {} (expected 5.0)",
        solution.voltage(n2)
    );
    assert_eq!(solution.voltage(NodeId::GROUND), 0.0);

    // Current through V1: 5mA flows through the chain, into the source.
    let i_v1 = solution.current(0);
    assert!(
        (i_v1 + 0.005).abs() < 1e-10,
        "I(V1) = {} (expected -0.005)",
        i_v1
    );
}

/// Current divider:
///
/// ```text
///     I1 = 10mA
///        |
///        v
///      node1 ---+--- R1 = 1k ---+--- GND
///               |               |
///               +--- R2 = 1k ---+
/// ```
///
/// Expected: V(node1) = 5V (parallel resistance = 500 ohms)
#[test]
fn test_current_divider() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");

    // 10mA drawn from ground, injected into node1.
    circuit.add_current_source(CurrentSource::new("I1", NodeId::GROUND, n1, "dc", 0.010));
    circuit.add_resistor(Resistor::new("R1", n1, NodeId::GROUND, 1000.0));
    circuit.add_resistor(Resistor::new("R2", n1, NodeId::GROUND, 1000.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let solution = solve_op(&mna).expect("solve should succeed");

    assert!(
        (solution.voltage(n1) - 5.0).abs() < 1e-10,
        "V(node1) = {} (expected 5.0)",
        solution.voltage(n1)
    );
}

/// Ohm's law through a single resistor: injecting i into a node loaded
/// by R gives V = i * R.
#[test]
fn test_ohms_law() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");

    circuit.add_current_source(CurrentSource::new("I1", NodeId::GROUND, n1, "dc", 0.002));
    circuit.add_resistor(Resistor::new("R1", n1, NodeId::GROUND, 500.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let solution = solve_op(&mna).expect("solve should succeed");

    assert!((solution.voltage(n1) - 1.0).abs() < 1e-10);
}

/// A subgraph with no path to ground makes the system singular.
#[test]
fn test_floating_subgraph_is_unsolvable() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");
    let n2 = circuit.intern_node("n2");
    let n3 = circuit.intern_node("n3");

    circuit.add_voltage_source(VoltageSource::new("V1", n1, NodeId::GROUND, "dc", 5.0));
    circuit.add_resistor(Resistor::new("R1", n1, NodeId::GROUND, 100.0));
    // n2-n3 island, unconnected to the rest.
    circuit.add_resistor(Resistor::new("R2", n2, n3, 100.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let result = solve_op(&mna);

    assert!(matches!(result, Err(Error::SingularMatrix)));
}

/// Two ideal voltage sources fixing the same node pair to different
/// voltages has no solution.
#[test]
fn test_conflicting_sources_are_unsolvable() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");

    circuit.add_voltage_source(VoltageSource::new("V1", n1, NodeId::GROUND, "dc", 5.0));
    circuit.add_voltage_source(VoltageSource::new("V2", n1, NodeId::GROUND, "dc", 10.0));
    circuit.add_resistor(Resistor::new("R1", n1, NodeId::GROUND, 100.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let result = solve_op(&mna);

    assert!(matches!(result, Err(Error::SingularMatrix)));
}

/// Ladder network exercising several KCL rows at once:
///
/// ```text
/// V1 --- n1 --R1-- n2 --R2-- n3 --R3-- GND
///                  |
///                 R4 (n2 to GND)
/// ```
#[test]
fn test_resistor_network() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");
    let n2 = circuit.intern_node("n2");
    let n3 = circuit.intern_node("n3");

    circuit.add_voltage_source(VoltageSource::new("V1", n1, NodeId::GROUND, "dc", 12.0));
    circuit.add_resistor(Resistor::new("R1", n1, n2, 100.0));
    circuit.add_resistor(Resistor::new("R2", n2, n3, 100.0));
    circuit.add_resistor(Resistor::new("R3", n3, NodeId::GROUND, 100.0));
    circuit.add_resistor(Resistor::new("R4", n2, NodeId::GROUND, 200.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let solution = solve_op(&mna).expect("solve should succeed");

    // From n2, the load is R4 = 200 in parallel with R2+R3 = 200, so
    // 100 ohms; divider from 12V: V(n2) = 12 * 100 / 200 = 6V, and
    // V(n3) = 3V.
    assert!((solution.voltage(n1) - 12.0).abs() < 1e-9);
    assert!((solution.voltage(n2) - 6.0).abs() < 1e-9);
    assert!((solution.voltage(n3) - 3.0).abs() < 1e-9);

    // Total source current: 12V across 100 + 100 = 60mA into the source.
    assert!((solution.current(0) + 0.060).abs() < 1e-9);
}

#[test]
fn test_report_is_complete() {
    let mut circuit = Circuit::new();
    let n1 = circuit.intern_node("n1");
    let n2 = circuit.intern_node("n2");

    circuit.add_resistor(Resistor::new("R1", n1, n2, 1000.0));
    circuit.add_resistor(Resistor::new("R2", n2, NodeId::GROUND, 1000.0));
    circuit.add_voltage_source(VoltageSource::new("V1", n1, NodeId::GROUND, "dc", 10.0));

    let mna = circuit.assemble_mna().expect("assembly should succeed");
    let solution = solve_op(&mna).expect("solve should succeed");
    let report = OpReport::new(&circuit, &solution);

    assert_eq!(report.node_voltages.len(), 3); // GND, n1, n2
    assert_eq!(report.node_voltages["GND"], 0.0);
    assert!((report.node_voltages["n1"] - 10.0).abs() < 1e-10);
    assert!((report.node_voltages["n2"] - 5.0).abs() < 1e-10);
    assert!((report.source_currents["V1"] + 0.005).abs() < 1e-10);
}
