use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use kyopro_templates::greedy;
use kyopro_templates::scanner::TokenReader;
use kyopro_templates::testcase::Case;

/// Reads `t` cases `a b c d` and prints one count per case.
#[derive(Parser)]
struct Cli {
    /// Largest `i` scanned; `i` starts at 1.
    #[clap(long, default_value_t = 99)]
    iterations: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let t: usize = input.next().context("Failed to read test count")?;
    let mut answers = Vec::with_capacity(t);
    for k in 0..t {
        let case = Case {
            a: input.next().with_context(|| format!("case {}: a", k))?,
            b: input.next().with_context(|| format!("case {}: b", k))?,
            c: input.next().with_context(|| format!("case {}: c", k))?,
            d: input.next().with_context(|| format!("case {}: d", k))?,
        };
        if case.d == 0 {
            anyhow::bail!("case {}: d must be nonzero", k);
        }
        let gaps = greedy::count_gaps(&case, 1..=cli.iterations)
            .with_context(|| format!("case {}: a + c * i overflows i64", k))?;
        answers.push(gaps);
    }
    if !answers.is_empty() {
        println!("{}", answers.iter().join("\n"));
    }
    Ok(())
}
