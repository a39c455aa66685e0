//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Missing inputs still run: each affected part reports a failure
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!(
            "Warning: missing {} input file(s): {}",
            missing.len(),
            missing.iter().map(|path| path.display()).join(", ")
        );
    }

    let formatter = OutputFormatter::new(config.quiet);
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
