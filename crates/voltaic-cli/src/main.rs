//! voltaic command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use voltaic::core::units::format_value;
use voltaic::{parse_file, solve_circuit};

#[derive(Parser)]
#[command(name = "voltaic")]
#[command(about = "A DC linear-circuit solver", long_about = None)]
#[command(version)]
struct Cli {
    /// Input netlist file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let circuit = parse_file(&cli.input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    if cli.verbose {
        println!("Nodes: {}", circuit.num_nodes());
        println!(
            "Elements: {} resistors, {} voltage sources, {} current sources",
            circuit.resistors().len(),
            circuit.voltage_sources().len(),
            circuit.current_sources().len()
        );
        println!("Unknowns: {}", circuit.size());
        println!();
    }

    let report = solve_circuit(&circuit)
        .with_context(|| format!("failed to solve {}", cli.input.display()))?;

    println!("Node voltages:");
    for (name, voltage) in &report.node_voltages {
        println!("  {:<12}{:>12}V", format!("V({})", name), format_value(*voltage));
    }

    if !report.source_currents.is_empty() {
        println!();
        println!("Source currents:");
        for (name, current) in &report.source_currents {
            println!("  {:<12}{:>12}A", format!("I({})", name), format_value(*current));
        }
    }

    Ok(())
}
