//! `eqcol` – command-line driver: read an instance, run the descent within
//! the wall-clock budget, append the result row to the output CSV.

use anyhow::Context;
use clap::Parser;
use eqcol::{report, run_descent, Instance, Params, StopCriterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "eqcol", about = "Equitable graph coloring via tabu search")]
struct Cli {
    /// Instance file: `n m` header followed by m 1-based edge pairs.
    input_file: PathBuf,

    /// Result CSV, appended (header written when the file is empty).
    output_file: PathBuf,

    /// PRNG seed for constructors, tie-breaks, tenure and perturbation.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Dynamic tenure coefficient on the conflicting-vertex count.
    #[arg(long, default_value_t = 0.6)]
    alpha: f64,

    /// Upper bound (inclusive) of the uniform additive tenure term.
    #[arg(long, default_value_t = 10)]
    beta: usize,

    /// Override tabu status on strictly improving candidates (0 or 1).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    aspiration: u8,

    /// Wall-clock budget in seconds for the whole descent.
    #[arg(long = "time_limit", default_value_t = 1000)]
    time_limit: u64,

    /// Iteration cap per fixed-k attempt.
    #[arg(long = "max_iter", default_value_t = 10_000_000)]
    max_iter: usize,

    /// Iterations without improvement before a perturbation fires.
    #[arg(long = "perturbation_limit", default_value_t = 1000)]
    perturbation_limit: usize,

    /// Fraction of n used as the perturbation exchange count.
    #[arg(long = "perturbation_strength", default_value_t = 0.16)]
    perturbation_strength: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let inst = Instance::from_path(&cli.input_file)
        .with_context(|| format!("reading instance {}", cli.input_file.display()))?;
    tracing::info!(
        instance = %cli.input_file.display(),
        n = inst.n(),
        m = inst.m(),
        max_degree = inst.max_degree(),
        "instance loaded"
    );

    let params = Params {
        max_iter: cli.max_iter,
        alpha: cli.alpha,
        beta: cli.beta,
        perturbation_limit: cli.perturbation_limit,
        perturbation_strength: cli.perturbation_strength,
        aspiration: cli.aspiration == 1,
    };

    let stop = StopCriterion::new(cli.time_limit as f64);
    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let result = run_descent(&inst, &params, &stop, &mut rng);

    report::append_row(
        &cli.output_file,
        &cli.input_file.display().to_string(),
        cli.seed,
        &params,
        &result,
    )
    .with_context(|| format!("writing results to {}", cli.output_file.display()))?;

    tracing::info!(
        initial_k = result.initial_k,
        best_k = result.best_k,
        seed = cli.seed,
        elapsed_secs = result.elapsed_secs,
        iterations = result.total_iterations,
        "descent finished"
    );
    Ok(())
}
