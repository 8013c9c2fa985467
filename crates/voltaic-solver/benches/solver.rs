//! Benchmarks for MNA assembly and solving.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voltaic_core::{Circuit, NodeId, Resistor, VoltageSource};
use voltaic_solver::solve_op;

/// Build a resistor ladder with `stages` sections hanging off a single
/// voltage source: series 1k elements with 1k shunts to ground.
fn ladder(stages: usize) -> Circuit {
    let mut circuit = Circuit::new();
    let mut prev = circuit.intern_node("n1");
    circuit.add_voltage_source(VoltageSource::new("V1", prev, NodeId::GROUND, "dc", 10.0));

    for stage in 1..=stages {
        let next = circuit.intern_node(&format!("n{}", stage + 1));
        circuit.add_resistor(Resistor::new(
            format!("Rs{}", stage),
            prev,
            next,
            1000.0,
        ));
        circuit.add_resistor(Resistor::new(
            format!("Rg{}", stage),
            next,
            NodeId::GROUND,
            1000.0,
        ));
        prev = next;
    }

    circuit
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_mna");

    for stages in [10, 50, 100] {
        let circuit = ladder(stages);
        group.bench_with_input(
            BenchmarkId::from_parameter(stages),
            &circuit,
            |bencher, circuit| {
                bencher.iter(|| black_box(circuit).assemble_mna().unwrap());
            },
        );
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_op");

    for stages in [10, 50, 100] {
        let mna = ladder(stages).assemble_mna().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(stages), &mna, |bencher, mna| {
            bencher.iter(|| solve_op(black_box(mna)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assemble, bench_solve);
criterion_main!(benches);
