use anyhow::{Context, bail};
use clap::Parser;
use kyopro_templates::judge::{self, LocalJudge};
use kyopro_templates::rng::{Xorshift, clock_seed};
use kyopro_templates::tree::TreeParams;
use std::io::BufReader;
use std::process::{Command, Stdio};

/// Runs a contestant command against an in-process judge over pipes.
#[derive(Parser, Debug)]
struct Cli {
    /// The shell command to run (e.g., the solution binary)
    cmd: String,
    #[clap(long, short = 'n', default_value_t = 10)]
    n: usize,
    #[clap(long, short = 'w', default_value_t = 10)]
    max_weight: u64,
    #[clap(long, short = 's')]
    seed: Option<u64>,
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
    let params = TreeParams {
        n: cli.n,
        max_weight: cli.max_weight,
        max_attempts: cli.max_attempts,
    };
    let mut judge = LocalJudge::random(&mut Xorshift::with_seed(seed), &params)
        .context("Failed to build tree")?;

    let stime = std::time::Instant::now();
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(&cli.cmd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("Failed to execute command: {}", cli.cmd))?;
    let to_child = child.stdin.take().context("child stdin not piped")?;
    let from_child = child.stdout.take().context("child stdout not piped")?;

    let res = judge::serve(&mut judge, BufReader::new(from_child), to_child);
    let status = child.wait().context("Failed to wait for contestant")?;
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    if let Err(e) = res {
        eprintln!("!log status RE");
        eprintln!("protocol error: {}", e);
    }
    if !status.success() {
        eprintln!("contestant exited with {}", status);
    }
    Ok(())
}
