//! Draws a random dataset labeled by a target line, then learns a separating hypothesis.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perceptron_learning::common_types::Line;
use perceptron_learning::datasets::{generate_linearly_separable, SyntheticConfig};
use perceptron_learning::perceptron::{decision_boundary, train};
use perceptron_learning::report::{label_counts, Extent};
use perceptron_learning::WeightInit;

#[derive(Parser, Debug)]
#[command(about = "Perceptron learning algorithm against an ideal target function")]
struct Args {
    #[arg(long, default_value_t = 20)]
    points: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Slope of the target function
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    slope: f64,

    /// Intercept of the target function
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    intercept: f64,

    #[arg(long, default_value_t = 1000)]
    max_epochs: usize,

    /// Initial weights: zeros or ones
    #[arg(long, default_value = "ones")]
    init: WeightInit,

    /// Write a PNG of the data, target and hypothesis (needs the `plot` feature)
    #[arg(long)]
    plot: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = SyntheticConfig {
        target: Line::new(args.slope, args.intercept),
        n_points: args.points,
        seed: args.seed,
        ..SyntheticConfig::default()
    };
    let data = generate_linearly_separable(&config)?;
    let (positive, negative) = label_counts(&data);
    let extent = Extent::of(&data)?;
    info!(positive, negative, x1 = ?extent.x1, x2 = ?extent.x2, "dataset ready");

    let outcome = train(&data, args.init.materialize(3), args.max_epochs)?;
    println!("Number of iterations needed: {}", outcome.epochs_run);
    println!("Number of weight updates needed: {}", outcome.updates_applied);
    println!("Weight values upon completion: {:?}", outcome.weights);
    if !outcome.converged {
        println!("Warning: no clean pass within {} epochs; weights are a partial result", args.max_epochs);
    }

    match decision_boundary(&outcome.weights) {
        Ok(line) => println!("Hypothesis: x2 = {} * x1 + {}", line.slope, line.intercept),
        Err(err) => println!("Hypothesis: {err}"),
    }

    if let Some(path) = args.plot {
        render(&path, &data, &config.target, &outcome.weights)?;
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn render(
    path: &std::path::Path,
    data: &[perceptron_learning::DataPoint<f64>],
    target: &Line<f64>,
    weights: &[f64],
) -> Result<()> {
    perceptron_learning::plot::render(path, data, Some(target), weights)?;
    info!(path = %path.display(), "plot written");
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn render(
    _path: &std::path::Path,
    _data: &[perceptron_learning::DataPoint<f64>],
    _target: &Line<f64>,
    _weights: &[f64],
) -> Result<()> {
    anyhow::bail!("this binary was built without the `plot` feature")
}
