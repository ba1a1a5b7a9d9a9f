//! Trains a perceptron on the 2-bit AND gate and prints the converged weights.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use perceptron_learning::datasets::and_gate;
use perceptron_learning::perceptron::{decision_boundary, train_with_observer, TrainingEvent};
use perceptron_learning::WeightInit;

#[derive(Parser, Debug)]
#[command(about = "Perceptron learning rule applied to a logical AND")]
struct Args {
    /// Upper bound on passes over the truth table
    #[arg(long, default_value_t = 10)]
    max_epochs: usize,

    /// Initial weights: zeros or ones
    #[arg(long, default_value = "zeros")]
    init: WeightInit,

    /// Log every update
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let data = and_gate::<f64>();
    let initial_weights = args.init.materialize(3);

    let outcome = train_with_observer(&data, initial_weights, args.max_epochs, |event| {
        if let TrainingEvent::Misclassified { index, .. } = event {
            println!("Found a misclassified data point: {:?}", data[*index].features);
        }
    })?;

    println!("{outcome}");
    match decision_boundary(&outcome.weights) {
        Ok(line) => println!("Decision boundary: x2 = {} * x1 + {}", line.slope, line.intercept),
        Err(err) => println!("Decision boundary: {err}"),
    }
    Ok(())
}
