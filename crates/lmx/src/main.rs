//! `lmx` -- lorem ipsum for mathematics.
//!
//! Thin caller around the `lorem-math` generator: parses a count of equal
//! signs and an optional seed, prints one formula to stdout.

use anyhow::Result;
use clap::Parser;

/// Print a pseudo-random, syntactically plausible LaTeX formula.
///
/// The output is placeholder text: it renders, but it doesn't mean anything.
#[derive(Parser, Debug)]
#[command(name = "lmx", about = "Random LaTeX placeholder formulas", version)]
struct Cli {
    /// Number of equals signs to join on (count + 1 equations).
    #[arg(default_value_t = 0)]
    equal_signs: u32,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("lorem_math=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let formula = lorem_math::formula::generate(cli.equal_signs, cli.seed)?;
    println!("{formula}");
    Ok(())
}
