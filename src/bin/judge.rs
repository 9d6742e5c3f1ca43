use anyhow::{Context, bail};
use clap::Parser;
use kyopro_templates::judge::{self, LocalJudge};
use kyopro_templates::rng::{Xorshift, clock_seed};
use kyopro_templates::tree::TreeParams;

/// Interactive judge for the tree diameter problem, talking over stdin/stdout.
#[derive(Parser, Debug)]
struct Cli {
    /// Number of vertices.
    #[clap(long, short = 'n', default_value_t = 10)]
    n: usize,
    /// Edge weights are drawn from 1..=max_weight.
    #[clap(long, short = 'w', default_value_t = 10)]
    max_weight: u64,
    /// Seed for the tree. Taken from the clock when omitted.
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// Upper bound on edge draws before giving up.
    #[clap(long, default_value_t = 1_000_000)]
    max_attempts: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.max_weight == 0 {
        bail!("--max-weight must be positive");
    }
    let seed = cli.seed.unwrap_or_else(clock_seed);
    eprintln!("!log seed {}", seed);
    let mut rng = Xorshift::with_seed(seed);
    let params = TreeParams {
        n: cli.n,
        max_weight: cli.max_weight,
        max_attempts: cli.max_attempts,
    };
    let mut judge = LocalJudge::random(&mut rng, &params).context("Failed to build tree")?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    judge::serve(&mut judge, stdin.lock(), stdout.lock()).context("Session aborted")?;
    Ok(())
}
