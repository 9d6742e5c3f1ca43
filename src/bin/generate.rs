use clap::Parser;
use kyopro_templates::rng::{Xorshift, clock_seed};
use kyopro_templates::testcase;

/// Prints random testcases `a b c d` for the greedy problem.
#[derive(Parser)]
struct Cli {
    /// Number of testcases.
    #[clap(long, short = 't', default_value_t = 1)]
    cases: usize,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// Upper bound on (b, c) redraws per case.
    #[clap(long, default_value_t = 1_000_000)]
    max_attempts: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);
    eprintln!("!log seed {}", seed);
    let mut rng = Xorshift::with_seed(seed);
    let cases = testcase::generate(&mut rng, args.cases, args.max_attempts)?;
    print!("{}", testcase::render(&cases));
    Ok(())
}
