//! Generate a synthetic instance with a planted equitable k-partition and
//! write it in the solver's text format.

use anyhow::Context;
use clap::Parser;
use eqcol::generator::{planted_instance, write_instance};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen_instances", about = "Planted equitable coloring instances")]
struct Cli {
    /// Output file.
    output: PathBuf,

    /// Vertex count.
    #[arg(long, default_value_t = 100)]
    n: usize,

    /// Planted color count (becomes the chromatic number).
    #[arg(long, default_value_t = 5)]
    k: usize,

    /// Probability of each cross-class edge.
    #[arg(long, default_value_t = 0.5)]
    density: f64,

    /// PRNG seed.
    #[arg(long, default_value_t = 2000)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let inst = planted_instance(cli.n, cli.k, cli.density, &mut rng);

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_instance(&mut writer, &inst)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "{}: n={} m={} planted_k={} density={}",
        cli.output.display(),
        inst.n(),
        inst.m(),
        cli.k,
        cli.density
    );
    Ok(())
}
